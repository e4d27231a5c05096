//! Arch-independent syscall signatures.
//!
//! Argument kinds:
//! - `Hex`: integer, printed as a hexadecimal immediate
//! - `Str`: pointer to a null-terminated string, printed as the string
//! - `Ptr`: pointer to some other data, printed as a raw address

use super::table::{ArgKind, Signature};
use crate::record::RetType;

macro_rules! signatures {
    ($( $name:ident ( $( $arg:tt : $kind:ident ),* $(,)? ) -> $ret:ident ; )*) => {
        pub(super) static SIGNATURES: &[Signature] = &[
            $(
                Signature {
                    name: stringify!($name),
                    args: &[ $( (stringify!($arg), ArgKind::$kind) ),* ],
                    ret: RetType::$ret,
                },
            )*
        ];
    };
}

signatures! {
    // process lifecycle
    restart_syscall() -> Number;
    exit(error_code: Hex) -> Void;
    exit_group(error_code: Hex) -> Void;
    fork() -> Number;
    vfork() -> Number;
    clone(clone_flags: Hex, newsp: Ptr, parent_tidptr: Ptr, tls: Ptr, child_tidptr: Ptr) -> Number;
    clone3(uargs: Ptr, size: Hex) -> Number;
    execve(filename: Str, argv: Ptr, envp: Ptr) -> Number;
    execveat(dfd: Hex, filename: Str, argv: Ptr, envp: Ptr, flags: Hex) -> Number;
    wait4(upid: Hex, stat_addr: Ptr, options: Hex, ru: Ptr) -> Number;
    waitid(which: Hex, upid: Hex, infop: Ptr, options: Hex, ru: Ptr) -> Number;
    set_tid_address(tidptr: Ptr) -> Number;
    unshare(unshare_flags: Hex) -> Number;
    setns(fd: Hex, nstype: Hex) -> Number;
    personality(personality: Hex) -> Number;
    prctl(option: Hex, arg2: Hex, arg3: Hex, arg4: Hex, arg5: Hex) -> Number;
    ptrace(request: Hex, pid: Hex, addr: Ptr, data: Ptr) -> Number;
    kcmp(pid1: Hex, pid2: Hex, type: Hex, idx1: Hex, idx2: Hex) -> Number;
    seccomp(op: Hex, flags: Hex, uargs: Ptr) -> Number;
    pidfd_open(pid: Hex, flags: Hex) -> Number;
    pidfd_getfd(pidfd: Hex, fd: Hex, flags: Hex) -> Number;
    pidfd_send_signal(pidfd: Hex, sig: Hex, info: Ptr, flags: Hex) -> Number;
    process_mrelease(pidfd: Hex, flags: Hex) -> Number;
    rseq(rseq: Ptr, rseq_len: Hex, flags: Hex, sig: Hex) -> Number;
    reboot(magic1: Hex, magic2: Hex, cmd: Hex, arg: Ptr) -> Number;
    kexec_load(entry: Hex, nr_segments: Hex, segments: Ptr, flags: Hex) -> Number;
    kexec_file_load(kernel_fd: Hex, initrd_fd: Hex, cmdline_len: Hex, cmdline_ptr: Str, flags: Hex) -> Number;

    // identity
    getpid() -> Number;
    getppid() -> Number;
    gettid() -> Number;
    getpgrp() -> Number;
    getpgid(pid: Hex) -> Number;
    setpgid(pid: Hex, pgid: Hex) -> Number;
    getsid(pid: Hex) -> Number;
    setsid() -> Number;
    getuid() -> Number;
    geteuid() -> Number;
    getgid() -> Number;
    getegid() -> Number;
    setuid(uid: Hex) -> Number;
    setgid(gid: Hex) -> Number;
    setreuid(ruid: Hex, euid: Hex) -> Number;
    setregid(rgid: Hex, egid: Hex) -> Number;
    setresuid(ruid: Hex, euid: Hex, suid: Hex) -> Number;
    getresuid(ruidp: Ptr, euidp: Ptr, suidp: Ptr) -> Number;
    setresgid(rgid: Hex, egid: Hex, sgid: Hex) -> Number;
    getresgid(rgidp: Ptr, egidp: Ptr, sgidp: Ptr) -> Number;
    setfsuid(uid: Hex) -> Number;
    setfsgid(gid: Hex) -> Number;
    getgroups(gidsetsize: Hex, grouplist: Ptr) -> Number;
    setgroups(gidsetsize: Hex, grouplist: Ptr) -> Number;
    getuid32() -> Number;
    geteuid32() -> Number;
    getgid32() -> Number;
    getegid32() -> Number;
    setuid32(uid: Hex) -> Number;
    setgid32(gid: Hex) -> Number;
    setreuid32(ruid: Hex, euid: Hex) -> Number;
    setregid32(rgid: Hex, egid: Hex) -> Number;
    setresuid32(ruid: Hex, euid: Hex, suid: Hex) -> Number;
    getresuid32(ruidp: Ptr, euidp: Ptr, suidp: Ptr) -> Number;
    setresgid32(rgid: Hex, egid: Hex, sgid: Hex) -> Number;
    getresgid32(rgidp: Ptr, egidp: Ptr, sgidp: Ptr) -> Number;
    setfsuid32(uid: Hex) -> Number;
    setfsgid32(gid: Hex) -> Number;
    getgroups32(gidsetsize: Hex, grouplist: Ptr) -> Number;
    setgroups32(gidsetsize: Hex, grouplist: Ptr) -> Number;
    capget(header: Ptr, dataptr: Ptr) -> Number;
    capset(header: Ptr, data: Ptr) -> Number;

    // files
    open(filename: Str, flags: Hex, mode: Hex) -> Number;
    openat(dirfd: Hex, pathname: Str, flags: Hex, mode: Hex) -> Number;
    openat2(dfd: Hex, filename: Str, how: Ptr, usize: Hex) -> Number;
    creat(pathname: Str, mode: Hex) -> Number;
    close(fd: Hex) -> Number;
    close_range(fd: Hex, max_fd: Hex, flags: Hex) -> Number;
    open_by_handle_at(mountdirfd: Hex, handle: Ptr, flags: Hex) -> Number;
    name_to_handle_at(dfd: Hex, name: Str, handle: Ptr, mnt_id: Ptr, flag: Hex) -> Number;
    read(fd: Hex, buf: Ptr, count: Hex) -> Number;
    write(fd: Hex, buf: Ptr, count: Hex) -> Number;
    readv(fd: Hex, vec: Ptr, vlen: Hex) -> Number;
    writev(fd: Hex, vec: Ptr, vlen: Hex) -> Number;
    pread64(fd: Hex, buf: Ptr, count: Hex, pos: Hex) -> Number;
    pwrite64(fd: Hex, buf: Ptr, count: Hex, pos: Hex) -> Number;
    preadv(fd: Hex, vec: Ptr, vlen: Hex, pos_l: Hex, pos_h: Hex) -> Number;
    pwritev(fd: Hex, vec: Ptr, vlen: Hex, pos_l: Hex, pos_h: Hex) -> Number;
    preadv2(fd: Hex, vec: Ptr, vlen: Hex, pos_l: Hex, pos_h: Hex, flags: Hex) -> Number;
    pwritev2(fd: Hex, vec: Ptr, vlen: Hex, pos_l: Hex, pos_h: Hex, flags: Hex) -> Number;
    lseek(fd: Hex, offset: Hex, whence: Hex) -> Number;
    _llseek(fd: Hex, offset_high: Hex, offset_low: Hex, result: Ptr, whence: Hex) -> Number;
    sendfile(out_fd: Hex, in_fd: Hex, offset: Ptr, count: Hex) -> Number;
    sendfile64(out_fd: Hex, in_fd: Hex, offset: Ptr, count: Hex) -> Number;
    splice(fd_in: Hex, off_in: Ptr, fd_out: Hex, off_out: Ptr, len: Hex, flags: Hex) -> Number;
    tee(fdin: Hex, fdout: Hex, len: Hex, flags: Hex) -> Number;
    vmsplice(fd: Hex, iov: Ptr, nr_segs: Hex, flags: Hex) -> Number;
    copy_file_range(fd_in: Hex, off_in: Ptr, fd_out: Hex, off_out: Ptr, len: Hex, flags: Hex) -> Number;
    readahead(fd: Hex, offset: Hex, count: Hex) -> Number;
    dup(fildes: Hex) -> Number;
    dup2(oldfd: Hex, newfd: Hex) -> Number;
    dup3(oldfd: Hex, newfd: Hex, flags: Hex) -> Number;
    pipe(fildes: Ptr) -> Number;
    pipe2(fildes: Ptr, flags: Hex) -> Number;
    fcntl(fd: Hex, cmd: Hex, arg: Hex) -> Number;
    fcntl64(fd: Hex, cmd: Hex, arg: Hex) -> Number;
    ioctl(fd: Hex, cmd: Hex, arg: Hex) -> Number;
    flock(fd: Hex, cmd: Hex) -> Number;
    fsync(fd: Hex) -> Number;
    fdatasync(fd: Hex) -> Number;
    sync() -> Number;
    syncfs(fd: Hex) -> Number;
    sync_file_range(fd: Hex, offset: Hex, nbytes: Hex, flags: Hex) -> Number;
    arm_sync_file_range(fd: Hex, flags: Hex, offset: Hex, nbytes: Hex) -> Number;
    fallocate(fd: Hex, mode: Hex, offset: Hex, len: Hex) -> Number;
    fadvise64(fd: Hex, offset: Hex, len: Hex, advice: Hex) -> Number;
    arm_fadvise64_64(fd: Hex, advice: Hex, offset: Hex, len: Hex) -> Number;
    truncate(path: Str, length: Hex) -> Number;
    ftruncate(fd: Hex, length: Hex) -> Number;
    truncate64(path: Str, length: Hex) -> Number;
    ftruncate64(fd: Hex, length: Hex) -> Number;
    getdents(fd: Hex, dirent: Ptr, count: Hex) -> Number;
    getdents64(fd: Hex, dirent: Ptr, count: Hex) -> Number;
    cachestat(fd: Hex, cstat_range: Ptr, cstat: Ptr, flags: Hex) -> Number;

    // file metadata
    stat(filename: Str, statbuf: Ptr) -> Number;
    lstat(filename: Str, statbuf: Ptr) -> Number;
    fstat(fd: Hex, statbuf: Ptr) -> Number;
    stat64(filename: Str, statbuf: Ptr) -> Number;
    lstat64(filename: Str, statbuf: Ptr) -> Number;
    fstat64(fd: Hex, statbuf: Ptr) -> Number;
    newfstatat(dfd: Hex, filename: Str, statbuf: Ptr, flag: Hex) -> Number;
    fstatat64(dfd: Hex, filename: Str, statbuf: Ptr, flag: Hex) -> Number;
    statx(dfd: Hex, filename: Str, flags: Hex, mask: Hex, buffer: Ptr) -> Number;
    statfs(pathname: Str, buf: Ptr) -> Number;
    fstatfs(fd: Hex, buf: Ptr) -> Number;
    statfs64(pathname: Str, sz: Hex, buf: Ptr) -> Number;
    fstatfs64(fd: Hex, sz: Hex, buf: Ptr) -> Number;
    ustat(dev: Hex, ubuf: Ptr) -> Number;
    access(filename: Str, mode: Hex) -> Number;
    faccessat(dfd: Hex, filename: Str, mode: Hex) -> Number;
    faccessat2(dfd: Hex, filename: Str, mode: Hex, flags: Hex) -> Number;
    chmod(filename: Str, mode: Hex) -> Number;
    fchmod(fd: Hex, mode: Hex) -> Number;
    fchmodat(dfd: Hex, filename: Str, mode: Hex) -> Number;
    fchmodat2(dfd: Hex, filename: Str, mode: Hex, flags: Hex) -> Number;
    chown(filename: Str, user: Hex, group: Hex) -> Number;
    lchown(filename: Str, user: Hex, group: Hex) -> Number;
    fchown(fd: Hex, user: Hex, group: Hex) -> Number;
    chown32(filename: Str, user: Hex, group: Hex) -> Number;
    lchown32(filename: Str, user: Hex, group: Hex) -> Number;
    fchown32(fd: Hex, user: Hex, group: Hex) -> Number;
    fchownat(dfd: Hex, filename: Str, user: Hex, group: Hex, flag: Hex) -> Number;
    umask(mask: Hex) -> Number;
    utimes(filename: Str, utimes: Ptr) -> Number;
    futimesat(dfd: Hex, filename: Str, utimes: Ptr) -> Number;
    utimensat(dfd: Hex, filename: Str, utimes: Ptr, flags: Hex) -> Number;
    utimensat_time64(dfd: Hex, filename: Str, utimes: Ptr, flags: Hex) -> Number;
    setxattr(pathname: Str, name: Str, value: Ptr, size: Hex, flags: Hex) -> Number;
    lsetxattr(pathname: Str, name: Str, value: Ptr, size: Hex, flags: Hex) -> Number;
    fsetxattr(fd: Hex, name: Str, value: Ptr, size: Hex, flags: Hex) -> Number;
    getxattr(pathname: Str, name: Str, value: Ptr, size: Hex) -> Number;
    lgetxattr(pathname: Str, name: Str, value: Ptr, size: Hex) -> Number;
    fgetxattr(fd: Hex, name: Str, value: Ptr, size: Hex) -> Number;
    listxattr(pathname: Str, list: Ptr, size: Hex) -> Number;
    llistxattr(pathname: Str, list: Ptr, size: Hex) -> Number;
    flistxattr(fd: Hex, list: Ptr, size: Hex) -> Number;
    removexattr(pathname: Str, name: Str) -> Number;
    lremovexattr(pathname: Str, name: Str) -> Number;
    fremovexattr(fd: Hex, name: Str) -> Number;

    // directories and links
    getcwd(buf: Ptr, size: Hex) -> Number;
    chdir(filename: Str) -> Number;
    fchdir(fd: Hex) -> Number;
    chroot(filename: Str) -> Number;
    mkdir(pathname: Str, mode: Hex) -> Number;
    mkdirat(dfd: Hex, pathname: Str, mode: Hex) -> Number;
    rmdir(pathname: Str) -> Number;
    mknod(filename: Str, mode: Hex, dev: Hex) -> Number;
    mknodat(dfd: Hex, filename: Str, mode: Hex, dev: Hex) -> Number;
    link(oldname: Str, newname: Str) -> Number;
    linkat(olddfd: Hex, oldname: Str, newdfd: Hex, newname: Str, flags: Hex) -> Number;
    unlink(pathname: Str) -> Number;
    unlinkat(dfd: Hex, pathname: Str, flag: Hex) -> Number;
    symlink(oldname: Str, newname: Str) -> Number;
    symlinkat(oldname: Str, newdfd: Hex, newname: Str) -> Number;
    readlink(path: Str, buf: Ptr, bufsiz: Hex) -> Number;
    readlinkat(dfd: Hex, pathname: Str, buf: Ptr, bufsiz: Hex) -> Number;
    rename(oldname: Str, newname: Str) -> Number;
    renameat(olddfd: Hex, oldname: Str, newdfd: Hex, newname: Str) -> Number;
    renameat2(olddfd: Hex, oldname: Str, newdfd: Hex, newname: Str, flags: Hex) -> Number;

    // filesystems
    mount(dev_name: Str, dir_name: Str, type: Str, flags: Hex, data: Ptr) -> Number;
    umount2(name: Str, flags: Hex) -> Number;
    pivot_root(new_root: Str, put_old: Str) -> Number;
    swapon(specialfile: Str, swap_flags: Hex) -> Number;
    swapoff(specialfile: Str) -> Number;
    quotactl(cmd: Hex, special: Str, id: Hex, addr: Ptr) -> Number;
    quotactl_fd(fd: Hex, cmd: Hex, id: Hex, addr: Ptr) -> Number;
    acct(name: Str) -> Number;
    uselib(library: Str) -> Number;
    sysfs(option: Hex, arg1: Hex, arg2: Hex) -> Number;
    lookup_dcookie(cookie64: Hex, buf: Ptr, len: Hex) -> Number;
    open_tree(dfd: Hex, filename: Str, flags: Hex) -> Number;
    move_mount(from_dfd: Hex, from_pathname: Str, to_dfd: Hex, to_pathname: Str, flags: Hex) -> Number;
    fsopen(fs_name: Str, flags: Hex) -> Number;
    fsconfig(fd: Hex, cmd: Hex, key: Str, value: Ptr, aux: Hex) -> Number;
    fsmount(fs_fd: Hex, flags: Hex, attr_flags: Hex) -> Number;
    fspick(dfd: Hex, path: Str, flags: Hex) -> Number;
    mount_setattr(dfd: Hex, path: Str, flags: Hex, uattr: Ptr, usize: Hex) -> Number;
    fanotify_init(flags: Hex, event_f_flags: Hex) -> Number;
    fanotify_mark(fanotify_fd: Hex, flags: Hex, mask: Hex, dfd: Hex, pathname: Str) -> Number;
    inotify_init() -> Number;
    inotify_init1(flags: Hex) -> Number;
    inotify_add_watch(fd: Hex, pathname: Str, mask: Hex) -> Number;
    inotify_rm_watch(fd: Hex, wd: Hex) -> Number;

    // memory
    brk(brk: Ptr) -> Pointer;
    mmap(addr: Ptr, len: Hex, prot: Hex, flags: Hex, fd: Hex, off: Hex) -> Pointer;
    mmap2(addr: Ptr, len: Hex, prot: Hex, flags: Hex, fd: Hex, pgoff: Hex) -> Pointer;
    munmap(addr: Ptr, len: Hex) -> Number;
    mremap(addr: Ptr, old_len: Hex, new_len: Hex, flags: Hex, new_addr: Ptr) -> Pointer;
    mprotect(start: Ptr, len: Hex, prot: Hex) -> Number;
    pkey_mprotect(start: Ptr, len: Hex, prot: Hex, pkey: Hex) -> Number;
    pkey_alloc(flags: Hex, init_val: Hex) -> Number;
    pkey_free(pkey: Hex) -> Number;
    msync(start: Ptr, len: Hex, flags: Hex) -> Number;
    mlock(start: Ptr, len: Hex) -> Number;
    mlock2(start: Ptr, len: Hex, flags: Hex) -> Number;
    munlock(start: Ptr, len: Hex) -> Number;
    mlockall(flags: Hex) -> Number;
    munlockall() -> Number;
    mincore(start: Ptr, len: Hex, vec: Ptr) -> Number;
    madvise(start: Ptr, len_in: Hex, behavior: Hex) -> Number;
    process_madvise(pidfd: Hex, vec: Ptr, vlen: Hex, behavior: Hex, flags: Hex) -> Number;
    remap_file_pages(start: Ptr, size: Hex, prot: Hex, pgoff: Hex, flags: Hex) -> Number;
    mbind(start: Ptr, len: Hex, mode: Hex, nmask: Ptr, maxnode: Hex, flags: Hex) -> Number;
    get_mempolicy(policy: Ptr, nmask: Ptr, maxnode: Hex, addr: Ptr, flags: Hex) -> Number;
    set_mempolicy(mode: Hex, nmask: Ptr, maxnode: Hex) -> Number;
    set_mempolicy_home_node(start: Ptr, len: Hex, home_node: Hex, flags: Hex) -> Number;
    migrate_pages(pid: Hex, maxnode: Hex, old_nodes: Ptr, new_nodes: Ptr) -> Number;
    move_pages(pid: Hex, nr_pages: Hex, pages: Ptr, nodes: Ptr, status: Ptr, flags: Hex) -> Number;
    memfd_create(uname: Str, flags: Hex) -> Number;
    memfd_secret(flags: Hex) -> Number;
    membarrier(cmd: Hex, flags: Hex, cpu_id: Hex) -> Number;
    userfaultfd(flags: Hex) -> Number;
    process_vm_readv(pid: Hex, lvec: Ptr, liovcnt: Hex, rvec: Ptr, riovcnt: Hex, flags: Hex) -> Number;
    process_vm_writev(pid: Hex, lvec: Ptr, liovcnt: Hex, rvec: Ptr, riovcnt: Hex, flags: Hex) -> Number;
    cacheflush(start: Ptr, end: Ptr, flags: Hex) -> Number;
    set_tls(val: Ptr) -> Number;
    breakpoint() -> Number;
    usr26() -> Number;
    usr32() -> Number;

    // signals
    kill(pid: Hex, sig: Hex) -> Number;
    tkill(pid: Hex, sig: Hex) -> Number;
    tgkill(tgid: Hex, pid: Hex, sig: Hex) -> Number;
    pause() -> Number;
    sigaction(sig: Hex, act: Ptr, oact: Ptr) -> Number;
    sigsuspend(restart: Hex, oldmask: Hex, mask: Hex) -> Number;
    sigpending(set: Ptr) -> Number;
    sigprocmask(how: Hex, nset: Ptr, oset: Ptr) -> Number;
    sigreturn() -> Number;
    sigaltstack(uss: Ptr, uoss: Ptr) -> Number;
    rt_sigaction(sig: Hex, act: Ptr, oact: Ptr, sigsetsize: Hex) -> Number;
    rt_sigprocmask(how: Hex, nset: Ptr, oset: Ptr, sigsetsize: Hex) -> Number;
    rt_sigpending(uset: Ptr, sigsetsize: Hex) -> Number;
    rt_sigsuspend(unewset: Ptr, sigsetsize: Hex) -> Number;
    rt_sigtimedwait(uthese: Ptr, uinfo: Ptr, uts: Ptr, sigsetsize: Hex) -> Number;
    rt_sigtimedwait_time64(uthese: Ptr, uinfo: Ptr, uts: Ptr, sigsetsize: Hex) -> Number;
    rt_sigqueueinfo(pid: Hex, sig: Hex, uinfo: Ptr) -> Number;
    rt_tgsigqueueinfo(tgid: Hex, pid: Hex, sig: Hex, uinfo: Ptr) -> Number;
    rt_sigreturn() -> Number;
    signalfd(ufd: Hex, user_mask: Ptr, sizemask: Hex) -> Number;
    signalfd4(ufd: Hex, user_mask: Ptr, sizemask: Hex, flags: Hex) -> Number;

    // scheduling
    sched_yield() -> Number;
    sched_setparam(pid: Hex, param: Ptr) -> Number;
    sched_getparam(pid: Hex, param: Ptr) -> Number;
    sched_setscheduler(pid: Hex, policy: Hex, param: Ptr) -> Number;
    sched_getscheduler(pid: Hex) -> Number;
    sched_setaffinity(pid: Hex, len: Hex, user_mask_ptr: Ptr) -> Number;
    sched_getaffinity(pid: Hex, len: Hex, user_mask_ptr: Ptr) -> Number;
    sched_get_priority_max(policy: Hex) -> Number;
    sched_get_priority_min(policy: Hex) -> Number;
    sched_rr_get_interval(pid: Hex, interval: Ptr) -> Number;
    sched_rr_get_interval_time64(pid: Hex, interval: Ptr) -> Number;
    sched_setattr(pid: Hex, uattr: Ptr, flags: Hex) -> Number;
    sched_getattr(pid: Hex, uattr: Ptr, usize: Hex, flags: Hex) -> Number;
    nice(increment: Hex) -> Number;
    getpriority(which: Hex, who: Hex) -> Number;
    setpriority(which: Hex, who: Hex, niceval: Hex) -> Number;
    ioprio_set(which: Hex, who: Hex, ioprio: Hex) -> Number;
    ioprio_get(which: Hex, who: Hex) -> Number;
    getcpu(cpup: Ptr, nodep: Ptr, unused: Ptr) -> Number;

    // synchronization
    futex(uaddr: Ptr, op: Hex, val: Hex, utime: Ptr, uaddr2: Ptr, val3: Hex) -> Number;
    futex_time64(uaddr: Ptr, op: Hex, val: Hex, utime: Ptr, uaddr2: Ptr, val3: Hex) -> Number;
    futex_waitv(waiters: Ptr, nr_futexes: Hex, flags: Hex, timeout: Ptr, clockid: Hex) -> Number;
    set_robust_list(head: Ptr, len: Hex) -> Number;
    get_robust_list(pid: Hex, head_ptr: Ptr, len_ptr: Ptr) -> Number;

    // time
    nanosleep(rqtp: Ptr, rmtp: Ptr) -> Number;
    gettimeofday(tv: Ptr, tz: Ptr) -> Number;
    settimeofday(tv: Ptr, tz: Ptr) -> Number;
    adjtimex(txc_p: Ptr) -> Number;
    times(tbuf: Ptr) -> Number;
    getitimer(which: Hex, value: Ptr) -> Number;
    setitimer(which: Hex, value: Ptr, ovalue: Ptr) -> Number;
    clock_settime(which_clock: Hex, tp: Ptr) -> Number;
    clock_gettime(which_clock: Hex, tp: Ptr) -> Number;
    clock_getres(which_clock: Hex, tp: Ptr) -> Number;
    clock_nanosleep(which_clock: Hex, flags: Hex, rqtp: Ptr, rmtp: Ptr) -> Number;
    clock_adjtime(which_clock: Hex, utx: Ptr) -> Number;
    clock_gettime64(which_clock: Hex, tp: Ptr) -> Number;
    clock_settime64(which_clock: Hex, tp: Ptr) -> Number;
    clock_adjtime64(which_clock: Hex, utx: Ptr) -> Number;
    clock_getres_time64(which_clock: Hex, tp: Ptr) -> Number;
    clock_nanosleep_time64(which_clock: Hex, flags: Hex, rqtp: Ptr, rmtp: Ptr) -> Number;
    timer_create(which_clock: Hex, timer_event_spec: Ptr, created_timer_id: Ptr) -> Number;
    timer_settime(timer_id: Hex, flags: Hex, new_setting: Ptr, old_setting: Ptr) -> Number;
    timer_gettime(timer_id: Hex, setting: Ptr) -> Number;
    timer_getoverrun(timer_id: Hex) -> Number;
    timer_delete(timer_id: Hex) -> Number;
    timer_gettime64(timer_id: Hex, setting: Ptr) -> Number;
    timer_settime64(timer_id: Hex, flags: Hex, new_setting: Ptr, old_setting: Ptr) -> Number;
    timerfd_create(clockid: Hex, flags: Hex) -> Number;
    timerfd_settime(ufd: Hex, flags: Hex, utmr: Ptr, otmr: Ptr) -> Number;
    timerfd_gettime(ufd: Hex, otmr: Ptr) -> Number;
    timerfd_gettime64(ufd: Hex, otmr: Ptr) -> Number;
    timerfd_settime64(ufd: Hex, flags: Hex, utmr: Ptr, otmr: Ptr) -> Number;

    // polling and events
    poll(ufds: Ptr, nfds: Hex, timeout_msecs: Hex) -> Number;
    ppoll(ufds: Ptr, nfds: Hex, tsp: Ptr, sigmask: Ptr, sigsetsize: Hex) -> Number;
    ppoll_time64(ufds: Ptr, nfds: Hex, tsp: Ptr, sigmask: Ptr, sigsetsize: Hex) -> Number;
    _newselect(n: Hex, inp: Ptr, outp: Ptr, exp: Ptr, tvp: Ptr) -> Number;
    pselect6(n: Hex, inp: Ptr, outp: Ptr, exp: Ptr, tsp: Ptr, sig: Ptr) -> Number;
    pselect6_time64(n: Hex, inp: Ptr, outp: Ptr, exp: Ptr, tsp: Ptr, sig: Ptr) -> Number;
    epoll_create(size: Hex) -> Number;
    epoll_create1(flags: Hex) -> Number;
    epoll_ctl(epfd: Hex, op: Hex, fd: Hex, event: Ptr) -> Number;
    epoll_wait(epfd: Hex, events: Ptr, maxevents: Hex, timeout: Hex) -> Number;
    epoll_pwait(epfd: Hex, events: Ptr, maxevents: Hex, timeout: Hex, sigmask: Ptr, sigsetsize: Hex) -> Number;
    epoll_pwait2(epfd: Hex, events: Ptr, maxevents: Hex, timeout: Ptr, sigmask: Ptr, sigsetsize: Hex) -> Number;
    eventfd(count: Hex) -> Number;
    eventfd2(count: Hex, flags: Hex) -> Number;

    // asynchronous I/O
    io_setup(nr_events: Hex, ctxp: Ptr) -> Number;
    io_destroy(ctx: Hex) -> Number;
    io_submit(ctx_id: Hex, nr: Hex, iocbpp: Ptr) -> Number;
    io_cancel(ctx_id: Hex, iocb: Ptr, result: Ptr) -> Number;
    io_getevents(ctx_id: Hex, min_nr: Hex, nr: Hex, events: Ptr, timeout: Ptr) -> Number;
    io_pgetevents(ctx_id: Hex, min_nr: Hex, nr: Hex, events: Ptr, timeout: Ptr, usig: Ptr) -> Number;
    io_pgetevents_time64(ctx_id: Hex, min_nr: Hex, nr: Hex, events: Ptr, timeout: Ptr, usig: Ptr) -> Number;
    io_uring_setup(entries: Hex, params: Ptr) -> Number;
    io_uring_enter(fd: Hex, to_submit: Hex, min_complete: Hex, flags: Hex, argp: Ptr, argsz: Hex) -> Number;
    io_uring_register(fd: Hex, opcode: Hex, arg: Ptr, nr_args: Hex) -> Number;

    // sockets
    socket(family: Hex, type: Hex, protocol: Hex) -> Number;
    socketpair(family: Hex, type: Hex, protocol: Hex, usockvec: Ptr) -> Number;
    bind(fd: Hex, umyaddr: Ptr, addrlen: Hex) -> Number;
    listen(fd: Hex, backlog: Hex) -> Number;
    accept(fd: Hex, upeer_sockaddr: Ptr, upeer_addrlen: Ptr) -> Number;
    accept4(fd: Hex, upeer_sockaddr: Ptr, upeer_addrlen: Ptr, flags: Hex) -> Number;
    connect(fd: Hex, uservaddr: Ptr, addrlen: Hex) -> Number;
    getsockname(fd: Hex, usockaddr: Ptr, usockaddr_len: Ptr) -> Number;
    getpeername(fd: Hex, usockaddr: Ptr, usockaddr_len: Ptr) -> Number;
    send(fd: Hex, buff: Ptr, len: Hex, flags: Hex) -> Number;
    sendto(fd: Hex, buff: Ptr, len: Hex, flags: Hex, addr: Ptr, addr_len: Hex) -> Number;
    recv(fd: Hex, ubuf: Ptr, size: Hex, flags: Hex) -> Number;
    recvfrom(fd: Hex, ubuf: Ptr, size: Hex, flags: Hex, addr: Ptr, addr_len: Ptr) -> Number;
    setsockopt(fd: Hex, level: Hex, optname: Hex, optval: Ptr, optlen: Hex) -> Number;
    getsockopt(fd: Hex, level: Hex, optname: Hex, optval: Ptr, optlen: Ptr) -> Number;
    shutdown(fd: Hex, how: Hex) -> Number;
    sendmsg(fd: Hex, msg: Ptr, flags: Hex) -> Number;
    recvmsg(fd: Hex, msg: Ptr, flags: Hex) -> Number;
    sendmmsg(fd: Hex, mmsg: Ptr, vlen: Hex, flags: Hex) -> Number;
    recvmmsg(fd: Hex, mmsg: Ptr, vlen: Hex, flags: Hex, timeout: Ptr) -> Number;
    recvmmsg_time64(fd: Hex, mmsg: Ptr, vlen: Hex, flags: Hex, timeout: Ptr) -> Number;

    // System V IPC and message queues
    msgget(key: Hex, msgflg: Hex) -> Number;
    msgctl(msqid: Hex, cmd: Hex, buf: Ptr) -> Number;
    msgrcv(msqid: Hex, msgp: Ptr, msgsz: Hex, msgtyp: Hex, msgflg: Hex) -> Number;
    msgsnd(msqid: Hex, msgp: Ptr, msgsz: Hex, msgflg: Hex) -> Number;
    semget(key: Hex, nsems: Hex, semflg: Hex) -> Number;
    semctl(semid: Hex, semnum: Hex, cmd: Hex, arg: Hex) -> Number;
    semop(semid: Hex, tsops: Ptr, nsops: Hex) -> Number;
    semtimedop(semid: Hex, tsops: Ptr, nsops: Hex, timeout: Ptr) -> Number;
    semtimedop_time64(semid: Hex, tsops: Ptr, nsops: Hex, timeout: Ptr) -> Number;
    shmget(key: Hex, size: Hex, shmflg: Hex) -> Number;
    shmctl(shmid: Hex, cmd: Hex, buf: Ptr) -> Number;
    shmat(shmid: Hex, shmaddr: Ptr, shmflg: Hex) -> Pointer;
    shmdt(shmaddr: Ptr) -> Number;
    mq_open(u_name: Str, oflag: Hex, mode: Hex, u_attr: Ptr) -> Number;
    mq_unlink(u_name: Str) -> Number;
    mq_timedsend(mqdes: Hex, u_msg_ptr: Ptr, msg_len: Hex, msg_prio: Hex, u_abs_timeout: Ptr) -> Number;
    mq_timedreceive(mqdes: Hex, u_msg_ptr: Ptr, msg_len: Hex, u_msg_prio: Ptr, u_abs_timeout: Ptr) -> Number;
    mq_timedsend_time64(mqdes: Hex, u_msg_ptr: Ptr, msg_len: Hex, msg_prio: Hex, u_abs_timeout: Ptr) -> Number;
    mq_timedreceive_time64(mqdes: Hex, u_msg_ptr: Ptr, msg_len: Hex, u_msg_prio: Ptr, u_abs_timeout: Ptr) -> Number;
    mq_notify(mqdes: Hex, u_notification: Ptr) -> Number;
    mq_getsetattr(mqdes: Hex, u_mqstat: Ptr, u_omqstat: Ptr) -> Number;

    // system information and resources
    uname(name: Ptr) -> Number;
    sethostname(name: Str, len: Hex) -> Number;
    setdomainname(name: Str, len: Hex) -> Number;
    sysinfo(info: Ptr) -> Number;
    syslog(type: Hex, buf: Ptr, len: Hex) -> Number;
    _sysctl(args: Ptr) -> Number;
    getrlimit(resource: Hex, rlim: Ptr) -> Number;
    ugetrlimit(resource: Hex, rlim: Ptr) -> Number;
    setrlimit(resource: Hex, rlim: Ptr) -> Number;
    prlimit64(pid: Hex, resource: Hex, new_rlim: Ptr, old_rlim: Ptr) -> Number;
    getrusage(who: Hex, ru: Ptr) -> Number;
    getrandom(buf: Ptr, count: Hex, flags: Hex) -> Number;
    vhangup() -> Number;
    pciconfig_iobase(which: Hex, bus: Hex, devfn: Hex) -> Number;
    pciconfig_read(bus: Hex, dfn: Hex, off: Hex, len: Hex, buf: Ptr) -> Number;
    pciconfig_write(bus: Hex, dfn: Hex, off: Hex, len: Hex, buf: Ptr) -> Number;

    // kernel modules, keys and security
    init_module(umod: Ptr, len: Hex, uargs: Str) -> Number;
    finit_module(fd: Hex, uargs: Str, flags: Hex) -> Number;
    delete_module(name_user: Str, flags: Hex) -> Number;
    add_key(type: Str, description: Str, payload: Ptr, plen: Hex, ringid: Hex) -> Number;
    request_key(type: Str, description: Str, callout_info: Str, destringid: Hex) -> Number;
    keyctl(option: Hex, arg2: Hex, arg3: Hex, arg4: Hex, arg5: Hex) -> Number;
    bpf(cmd: Hex, uattr: Ptr, size: Hex) -> Number;
    perf_event_open(attr_uptr: Ptr, pid: Hex, cpu: Hex, group_fd: Hex, flags: Hex) -> Number;
    landlock_create_ruleset(attr: Ptr, size: Hex, flags: Hex) -> Number;
    landlock_add_rule(ruleset_fd: Hex, rule_type: Hex, rule_attr: Ptr, flags: Hex) -> Number;
    landlock_restrict_self(ruleset_fd: Hex, flags: Hex) -> Number;
}
