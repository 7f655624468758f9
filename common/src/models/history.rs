/// A revision at which a package's version label changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionChange {
    pub revision: String,
    pub version: String,
    pub dependencies: Vec<String>,
}

/// Collapses a `{pkg}_versions_full.txt` history to its version changes.
///
/// Each line reads `rev\tversion\tdep1,dep2`. Consecutive lines with the same
/// version collapse onto the first of them. Lines with fewer than two columns are skipped.
pub fn collapse_revisions<'a, I>(lines: I) -> Vec<VersionChange>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut changes: Vec<VersionChange> = Vec::new();

    for line in lines {
        let mut cols = line.trim().split('\t');
        let (Some(revision), Some(version)) = (cols.next(), cols.next()) else {
            continue;
        };
        if changes.last().is_some_and(|last| last.version == version) {
            continue;
        }

        let dependencies = cols
            .next()
            .map(|deps| {
                deps.split(',')
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        changes.push(VersionChange {
            revision: revision.to_string(),
            version: version.to_string(),
            dependencies,
        });
    }

    changes
}

/// The version a `{pkg}_versions_full.txt` history records at exactly `revision`.
pub fn version_at_rev<'a, I>(lines: I, revision: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().find_map(|line| {
        let mut cols = line.trim().split('\t');
        if cols.next()? != revision {
            return None;
        }
        cols.next().filter(|v| !v.is_empty()).map(String::from)
    })
}
