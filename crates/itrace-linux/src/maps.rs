use std::ops::Range;

use itrace_recorder::engine::MemoryMap;

use crate::error::{Error, Result};

/// Parses the content of a `/proc/<pid>/maps` file.
pub fn parse_maps(content: &str) -> Result<Vec<MemoryMap>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_maps_line)
        .collect()
}

/// Parses one line of a `/proc/<pid>/maps` file.
///
/// ```text
/// 7f0000000000-7f0000021000 rw-p 00000000 00:00 0          [heap]
/// ```
pub fn parse_maps_line(line: &str) -> Result<MemoryMap> {
    let bad_line = || Error::MapsLine(line.to_owned());

    let (range, rest) = next_field(line).ok_or_else(bad_line)?;
    let (perms, rest) = next_field(rest).ok_or_else(bad_line)?;

    // offset, device and inode
    let (_, rest) = next_field(rest).ok_or_else(bad_line)?;
    let (_, rest) = next_field(rest).ok_or_else(bad_line)?;
    let (_, name) = next_field(rest).ok_or_else(bad_line)?;

    let (start, end) = range.split_once('-').ok_or_else(bad_line)?;
    let start = u64::from_str_radix(start, 16).map_err(|_| bad_line())?;
    let end = u64::from_str_radix(end, 16).map_err(|_| bad_line())?;

    if end < start {
        return Err(bad_line());
    }

    Ok(MemoryMap {
        range: start..end,
        perms: perms.to_owned(),
        name: name.trim().to_owned(),
    })
}

fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }

    Some(s.split_once(char::is_whitespace).unwrap_or((s, "")))
}

/// Returns the address range a module is loaded at: from the lowest start
/// to the highest end of the mappings backed by it.
///
/// `module` is either the full path of the module, or its file name.
pub fn module_range(maps: &[MemoryMap], module: &str) -> Option<Range<u64>> {
    let is_module = |map: &&MemoryMap| {
        map.name == module
            || map
                .name
                .rsplit_once('/')
                .is_some_and(|(_, file_name)| file_name == module)
    };

    let start = maps.iter().filter(is_module).map(|map| map.range.start).min()?;
    let end = maps.iter().filter(is_module).map(|map| map.range.end).max()?;

    Some(start..end)
}
