//! Batch conversion of a markdown directory into section files.
//!
//! Files are processed one at a time in name order. The sections of a
//! file are written in parallel and all writes are joined before the next
//! file is read, so every artifact exists once [`Converter::run`] returns.
//! Sections whose sanitized headers collide share one output file; the
//! later section in document order replaces the earlier one before any
//! write is launched. Unreadable files and failed writes are logged and
//! recorded in the report; only directory failures abort the batch.

use crate::convert::naming::{DEFAULT_DOCS_BASE_URL, docs_link, output_file_name};
use crate::core::Section;
use crate::error::Result;
use crate::io::{ensure_dir, list_files_with_extension, read_file, write_file};
use crate::render::{CommonMarkRenderer, Renderer};
use crate::splitting::SectionSplitter;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Default input directory.
pub const DEFAULT_INPUT_DIR: &str = "copilot/data/data/";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "copilot/data/doc-sections";

/// Extension of source documents.
pub const SOURCE_EXTENSION: &str = "md";

/// One written section artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenSection {
    /// Source file name (e.g. `intro.md`).
    pub source: String,
    /// Section index within the source.
    pub index: usize,
    /// Header text as extracted, before sanitization.
    pub header: String,
    /// Output file name.
    pub output_file: String,
    /// Documentation link derived from the output file name.
    pub docs_link: String,
    /// Size of the written plain text in bytes.
    pub bytes: usize,
}

/// A source file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path of the source file.
    pub path: String,
    /// Reason it was skipped.
    pub reason: String,
}

/// A section that could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteFailure {
    /// Source file name.
    pub source: String,
    /// Output file name that failed.
    pub output_file: String,
    /// Reason for failure.
    pub reason: String,
}

/// Summary of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Input directory that was scanned.
    pub input_dir: String,
    /// Output directory that was written.
    pub output_dir: String,
    /// Number of source files read and split.
    pub files_converted: usize,
    /// Sections written, grouped by source in processing order.
    pub sections_written: Vec<WrittenSection>,
    /// Sections replaced by a later section with the same output file.
    pub sections_replaced: usize,
    /// Source files skipped because they could not be read.
    pub skipped_files: Vec<SkippedFile>,
    /// Section writes that failed.
    pub write_failures: Vec<WriteFailure>,
}

impl ConversionReport {
    fn new(input_dir: &Path, output_dir: &Path) -> Self {
        Self {
            input_dir: input_dir.to_string_lossy().to_string(),
            output_dir: output_dir.to_string_lossy().to_string(),
            ..Default::default()
        }
    }

    /// Returns whether every file was read and every section written.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_files.is_empty() && self.write_failures.is_empty()
    }

    /// Returns the output file names, sorted.
    #[must_use]
    pub fn output_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self
            .sections_written
            .iter()
            .map(|s| s.output_file.as_str())
            .collect();
        files.sort_unstable();
        files
    }
}

/// Converts every markdown file of a directory into per-section text files.
///
/// # Examples
///
/// ```no_run
/// use md_sections::convert::Converter;
///
/// let report = Converter::new("docs", "out").run().unwrap();
/// println!("{} sections", report.sections_written.len());
/// ```
#[derive(Debug, Clone)]
pub struct Converter<R: Renderer = CommonMarkRenderer> {
    input_dir: PathBuf,
    output_dir: PathBuf,
    docs_base_url: String,
    splitter: SectionSplitter<R>,
}

impl Converter {
    /// Creates a converter using the CommonMark renderer.
    #[must_use]
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(input_dir: P, output_dir: Q) -> Self {
        Self::with_splitter(input_dir, output_dir, SectionSplitter::new())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR)
    }
}

impl<R: Renderer> Converter<R> {
    /// Creates a converter with a custom splitter.
    #[must_use]
    pub fn with_splitter<P: Into<PathBuf>, Q: Into<PathBuf>>(
        input_dir: P,
        output_dir: Q,
        splitter: SectionSplitter<R>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            splitter,
        }
    }

    /// Sets the base URL used for documentation links in the report.
    #[must_use]
    pub fn docs_base_url(mut self, url: &str) -> Self {
        self.docs_base_url = url.to_string();
        self
    }

    /// Returns the input directory.
    #[must_use]
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Runs the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or the
    /// input directory cannot be listed. Per-file read failures and
    /// per-section write failures are reported, not returned.
    pub fn run(&self) -> Result<ConversionReport> {
        ensure_dir(&self.output_dir)?;
        let sources = list_files_with_extension(&self.input_dir, SOURCE_EXTENSION)?;

        let mut report = ConversionReport::new(&self.input_dir, &self.output_dir);
        debug!(
            input = %self.input_dir.display(),
            files = sources.len(),
            "found markdown files"
        );

        for path in sources {
            let source = file_name_of(&path);
            let content = match read_file(&path) {
                Ok(content) => content,
                Err(e) => {
                    error!(file = %source, error = %e, "skipping unreadable file");
                    report.skipped_files.push(SkippedFile {
                        path: path.to_string_lossy().to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let sections = self.splitter.split(&content);
            debug!(file = %source, sections = sections.len(), "split document");

            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();

            let planned = plan_writes(&stem, &sections);
            report.sections_replaced += sections.len() - planned.len();

            let outcomes: Vec<_> = planned
                .into_par_iter()
                .map(|(output_file, section)| self.write_section(&source, output_file, section))
                .collect();

            for outcome in outcomes {
                match outcome {
                    Ok(written) => report.sections_written.push(written),
                    Err(failure) => report.write_failures.push(failure),
                }
            }
            report.files_converted += 1;
        }

        Ok(report)
    }

    fn write_section(
        &self,
        source: &str,
        output_file: String,
        section: &Section,
    ) -> std::result::Result<WrittenSection, WriteFailure> {
        let output_path = self.output_dir.join(&output_file);

        match write_file(&output_path, &section.plain_text) {
            Ok(()) => {
                info!("Converted {source} to {output_file}");
                Ok(WrittenSection {
                    source: source.to_string(),
                    index: section.index,
                    header: section.header.clone(),
                    docs_link: docs_link(&output_file, &self.docs_base_url),
                    output_file,
                    bytes: section.plain_text.len(),
                })
            }
            Err(e) => {
                error!(file = %source, output = %output_file, error = %e, "failed to write section");
                Err(WriteFailure {
                    source: source.to_string(),
                    output_file,
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Pairs each section with its output file name.
///
/// When names collide the later section takes the slot of the earlier one,
/// so each output file is written exactly once.
fn plan_writes<'a>(stem: &str, sections: &'a [Section]) -> Vec<(String, &'a Section)> {
    let mut planned: Vec<(String, &Section)> = Vec::with_capacity(sections.len());
    let mut slots: HashMap<String, usize> = HashMap::new();

    for section in sections {
        let output_file = output_file_name(stem, &section.header);
        if let Some(&slot) = slots.get(&output_file) {
            debug!(output = %output_file, index = section.index, "header collision");
            planned[slot].1 = section;
        } else {
            slots.insert(output_file.clone(), planned.len());
            planned.push((output_file, section));
        }
    }

    planned
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Converts `input_dir` into `output_dir` with default settings.
///
/// # Errors
///
/// See [`Converter::run`].
pub fn run<P: Into<PathBuf>, Q: Into<PathBuf>>(
    input_dir: P,
    output_dir: Q,
) -> Result<ConversionReport> {
    Converter::new(input_dir, output_dir).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, IoError};
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> (TempDir, PathBuf, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in");
        let output = temp_dir.path().join("out");
        std::fs::create_dir_all(&input).unwrap();
        for (name, content) in files {
            std::fs::write(input.join(name), content).unwrap();
        }
        (temp_dir, input, output)
    }

    #[test]
    fn test_single_header_file() {
        let (_temp, input, output) = setup(&[("a.md", "# X Y\n")]);

        let report = run(&input, &output).unwrap();

        let entries: Vec<_> = std::fs::read_dir(&output)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(entries, vec!["a_section_X-Y.txt"]);
        assert_eq!(
            std::fs::read_to_string(output.join("a_section_X-Y.txt")).unwrap(),
            "X Y\n"
        );
        assert_eq!(report.files_converted, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_creates_nested_output_dir() {
        let (_temp, input, output) = setup(&[("doc.md", "text")]);
        let nested = output.join("deep/er");

        run(&input, &nested).unwrap();
        assert!(nested.join("doc_section_no_header.txt").exists());
    }

    #[test]
    fn test_non_markdown_ignored() {
        let (_temp, input, output) = setup(&[
            ("notes.txt", "# Not markdown\n"),
            ("README.MD", "# Upper\n"),
            ("keep.md", "# Keep\n"),
        ]);

        let report = run(&input, &output).unwrap();
        assert_eq!(report.files_converted, 1);
        assert_eq!(report.output_files(), vec!["keep_section_Keep.txt"]);
    }

    #[test]
    fn test_collision_last_write_survives() {
        let (_temp, input, output) = setup(&[("dup.md", "# Same!\none\n# Same?\ntwo\n")]);

        let report = run(&input, &output).unwrap();
        assert_eq!(report.sections_written.len(), 1);
        assert_eq!(report.sections_replaced, 1);
        assert_eq!(report.output_files(), vec!["dup_section_Same-.txt"]);

        let content = std::fs::read_to_string(output.join("dup_section_Same-.txt")).unwrap();
        assert_eq!(content, "Same?\ntwo\n");
    }

    #[test]
    fn test_plan_writes_keeps_first_slot() {
        let sections = crate::splitting::split("# A\n# B\n# A\n");
        let planned = plan_writes("doc", &sections);

        let names: Vec<_> = planned.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["doc_section_A.txt", "doc_section_B.txt"]);
        assert_eq!(planned[0].1.index, 2);
    }

    #[test]
    fn test_unreadable_file_skipped() {
        let (_temp, input, output) = setup(&[("good.md", "# Good\n")]);
        std::fs::write(input.join("bad.md"), [0xff, 0xfe]).unwrap();

        let report = run(&input, &output).unwrap();
        assert_eq!(report.files_converted, 1);
        assert_eq!(report.skipped_files.len(), 1);
        assert!(report.skipped_files[0].path.ends_with("bad.md"));
        assert!(output.join("good_section_Good.txt").exists());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_directory_named_like_markdown_skipped() {
        let (_temp, input, output) = setup(&[("real.md", "# Real\n")]);
        std::fs::create_dir(input.join("folder.md")).unwrap();

        let report = run(&input, &output).unwrap();
        assert_eq!(report.files_converted, 1);
        assert_eq!(report.skipped_files.len(), 1);
    }

    #[test]
    fn test_missing_input_dir_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let result = run(temp_dir.path().join("missing"), temp_dir.path().join("out"));
        assert!(matches!(result, Err(Error::Io(IoError::ListFailed { .. }))));
        // Output directory is created before listing.
        assert!(temp_dir.path().join("out").is_dir());
    }

    #[test]
    fn test_output_dir_blocked_aborts() {
        let (_temp, input, output) = setup(&[("a.md", "# A\n")]);
        std::fs::write(&output, "not a directory").unwrap();

        let result = run(&input, &output);
        assert!(matches!(result, Err(Error::Io(IoError::DirectoryFailed { .. }))));
    }

    #[test]
    fn test_rerun_overwrites() {
        let (_temp, input, output) = setup(&[("a.md", "# A\nfirst\n")]);
        run(&input, &output).unwrap();

        std::fs::write(input.join("a.md"), "# A\nsecond\n").unwrap();
        run(&input, &output).unwrap();

        assert_eq!(
            std::fs::read_to_string(output.join("a_section_A.txt")).unwrap(),
            "A\nsecond\n"
        );
    }

    #[test]
    fn test_report_docs_links() {
        let (_temp, input, output) = setup(&[("getting_started.md", "intro\n# Install Python\n")]);

        let report = Converter::new(&input, &output)
            .docs_base_url("https://docs.example.org/")
            .run()
            .unwrap();

        let links: Vec<_> = report
            .sections_written
            .iter()
            .map(|s| s.docs_link.as_str())
            .collect();
        assert_eq!(
            links,
            vec![
                "https://docs.example.org/getting-started",
                "https://docs.example.org/getting-started/#install-python",
            ]
        );
    }

    #[test]
    fn test_empty_markdown_file() {
        let (_temp, input, output) = setup(&[("empty.md", "")]);

        let report = run(&input, &output).unwrap();
        assert_eq!(report.sections_written.len(), 1);
        assert_eq!(
            std::fs::read_to_string(output.join("empty_section_no_header.txt")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_default_converter_paths() {
        let converter = Converter::default();
        assert_eq!(converter.input_dir(), Path::new(DEFAULT_INPUT_DIR));
        assert_eq!(converter.output_dir(), Path::new(DEFAULT_OUTPUT_DIR));
    }
}
