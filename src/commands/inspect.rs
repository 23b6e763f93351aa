use crate::areas::resolver::Resolver;
use std::io::Write;
use std::path::PathBuf;

impl Resolver {
    /// Prints the conflict regions of each file. Returns the number of files
    /// that could not be read or whose markers are malformed.
    pub fn inspect(&self, files: &[PathBuf]) -> anyhow::Result<usize> {
        let mut failures = 0;

        for path in files {
            let document = self
                .workspace()
                .read_file(path)
                .and_then(|text| self.conflicts().parse(&text));

            let document = match document {
                Ok(document) => document,
                Err(err) => {
                    failures += 1;
                    writeln!(self.writer(), "{}: {err}", path.display())?;
                    continue;
                }
            };

            if document.is_clean() {
                writeln!(self.writer(), "{}: clean", path.display())?;
                continue;
            }

            let count = document.region_count();
            let noun = if count == 1 { "region" } else { "regions" };
            writeln!(self.writer(), "{}: {count} conflict {noun}", path.display())?;

            for region in document.regions() {
                writeln!(
                    self.writer(),
                    "  line {}: ours {} lines, theirs {} lines",
                    region.line(),
                    region.ours_line_count(),
                    region.theirs_line_count()
                )?;
            }
        }

        Ok(failures)
    }
}
