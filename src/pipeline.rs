//! Icon set generation.
//!
//! For every size, every non-blacklisted template and every interaction
//! state, the template is colorized, rasterized and written to the output
//! directory as `{name}{state}{size suffix}`. Failures are recorded per asset
//! and never stop the rest of the batch. Once every base-size asset has been
//! written, the produced filenames are reconciled against the references
//! found in the stylesheet.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::discovery::{resource_dir, scan_templates, Config};
use crate::error::{IconError, Result};
use crate::render::{colorize, expand, Colorized, Rasterizer, PLACEHOLDER};
use crate::types::{Palette, SizeSpec, StateColours, StateVariant, Template};
use crate::validation::{codes, reconcile, Diagnostic, MatchMode, ReferenceExtractor, ValidationResult};

/// An asset or template that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetFailure {
    pub asset: String,
    pub message: String,
}

/// Counters and findings from one pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    /// Templates found in the template directory.
    pub templates: usize,
    /// Templates skipped because they are blacklisted.
    pub skipped: usize,
    /// Raster files written.
    pub produced: usize,
    /// Unique stylesheet references, `None` when the stylesheet was unreadable.
    pub references: Option<usize>,
    /// References with no matching base-size asset, sorted.
    pub unmatched: Vec<String>,
    /// Variants whose template had no placeholder colour.
    pub untinted: Vec<String>,
    pub failures: Vec<AssetFailure>,
    /// Filenames written, in production order.
    #[serde(skip)]
    pub assets: Vec<String>,
    /// Why reconciliation did not run.
    #[serde(skip)]
    pub stylesheet_error: Option<String>,
}

impl RunStats {
    /// Warnings and errors worth showing to the operator.
    pub fn diagnostics(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        for failure in &self.failures {
            result.push(Diagnostic::error(
                codes::ASSET_FAILED,
                &failure.asset,
                &failure.message,
            ));
        }

        for variant in &self.untinted {
            result.push(
                Diagnostic::warning(codes::UNTINTED, variant, "template has no placeholder colour")
                    .with_help(format!("Paint the recolourable parts with {}", PLACEHOLDER)),
            );
        }

        if let Some(error) = &self.stylesheet_error {
            result.push(Diagnostic::warning(
                codes::NO_STYLESHEET,
                "stylesheet",
                format!("references not checked: {}", error),
            ));
        }

        for reference in &self.unmatched {
            result.push(
                Diagnostic::warning(
                    codes::UNMATCHED_REFERENCE,
                    reference,
                    "referenced by the stylesheet but not produced",
                )
                .with_help("Add a template that produces this file or fix the stylesheet"),
            );
        }

        result
    }
}

/// A template read and expanded once, shared by every size.
struct Prepared {
    variants: Vec<(StateVariant, Colorized)>,
}

/// Generates the icon set for one palette.
pub struct AssetPipeline<'a> {
    template_dir: PathBuf,
    output_dir: PathBuf,
    palette: &'a Palette,
    stylesheet: Option<PathBuf>,
    extractor: Option<ReferenceExtractor>,
    sizes: Vec<SizeSpec>,
    blacklist: Vec<String>,
}

impl<'a> AssetPipeline<'a> {
    /// Create a pipeline with the default sizes and an empty blacklist.
    pub fn new(
        template_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        palette: &'a Palette,
    ) -> Self {
        Self {
            template_dir: template_dir.into(),
            output_dir: output_dir.into(),
            palette,
            stylesheet: None,
            extractor: None,
            sizes: SizeSpec::defaults(),
            blacklist: Vec::new(),
        }
    }

    /// Build a pipeline from project configuration.
    pub fn from_config(config: &Config, palette: &'a Palette, mode: MatchMode) -> Result<Self> {
        let extractor = ReferenceExtractor::new(&config.reference_pattern, mode)?;

        Ok(Self::new(&config.templates, &config.output, palette)
            .with_sizes(config.sizes.clone())
            .with_blacklist(config.blacklist.iter().cloned())
            .with_stylesheet(&config.stylesheet, extractor))
    }

    /// Sizes to render; the first one is the base size.
    pub fn with_sizes(mut self, sizes: Vec<SizeSpec>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_blacklist(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.blacklist = names.into_iter().map(Into::into).collect();
        self
    }

    /// Cross-check produced assets against references in `path`.
    pub fn with_stylesheet(mut self, path: impl Into<PathBuf>, extractor: ReferenceExtractor) -> Self {
        self.stylesheet = Some(path.into());
        self.extractor = Some(extractor);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn is_blacklisted(&self, filename: &str) -> bool {
        let name = Template::base_name(filename);
        self.blacklist.iter().any(|b| b == name)
    }

    /// Run the pipeline.
    ///
    /// Fails early on an incomplete palette, a missing template directory or
    /// an output directory that cannot be created. Everything after that is
    /// reported through [`RunStats`].
    pub fn run(&self, rasterizer: &dyn Rasterizer) -> Result<RunStats> {
        let colours = StateColours::resolve(self.palette)?;
        let templates = scan_templates(&self.template_dir)?;

        let mut stats = RunStats {
            templates: templates.len(),
            ..Default::default()
        };

        let references = self.load_references(&mut stats);

        fs::create_dir_all(&self.output_dir).map_err(|e| IconError::Io {
            path: self.output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;

        let mut prepared = Vec::new();
        for filename in &templates {
            if self.is_blacklisted(filename) {
                stats.skipped += 1;
                continue;
            }

            match self.prepare(filename, &colours) {
                Ok(template) => {
                    for (variant, colorized) in &template.variants {
                        if colorized.is_untinted() {
                            stats.untinted.push(variant.filename.clone());
                        }
                    }
                    prepared.push(template);
                }
                Err(e) => stats.failures.push(AssetFailure {
                    asset: filename.clone(),
                    message: e.to_string(),
                }),
            }
        }

        let mut base_assets = Vec::new();
        let mut emitted = BTreeSet::new();
        for (index, size) in self.sizes.iter().enumerate() {
            for template in &prepared {
                for (variant, colorized) in &template.variants {
                    let output_name = variant.output_filename(size);

                    if !emitted.insert(output_name.clone()) {
                        stats.failures.push(AssetFailure {
                            message: format!(
                                "{} would overwrite an asset already produced in this run",
                                variant.filename
                            ),
                            asset: output_name,
                        });
                        continue;
                    }

                    match self.produce(rasterizer, &colorized.source, size, &output_name) {
                        Ok(()) => {
                            stats.produced += 1;
                            if index == 0 {
                                base_assets.push(output_name.clone());
                            }
                            stats.assets.push(output_name);
                        }
                        Err(e) => stats.failures.push(AssetFailure {
                            asset: output_name,
                            message: e.to_string(),
                        }),
                    }
                }
            }
        }

        if let Some(references) = references {
            stats.references = Some(references.len());
            stats.unmatched = reconcile(
                &references,
                base_assets.iter().map(String::as_str),
                &resource_dir(&self.output_dir),
            );
        }

        Ok(stats)
    }

    fn load_references(&self, stats: &mut RunStats) -> Option<BTreeSet<String>> {
        let (path, extractor) = (self.stylesheet.as_ref()?, self.extractor.as_ref()?);

        match extractor.extract_file(path) {
            Ok(references) => Some(references),
            Err(e) => {
                stats.stylesheet_error = Some(e.to_string());
                None
            }
        }
    }

    fn prepare(&self, filename: &str, colours: &StateColours) -> Result<Prepared> {
        let variants = expand(filename, colours)?;

        let path = self.template_dir.join(filename);
        let source = fs::read_to_string(&path).map_err(|e| IconError::Io {
            path: path.clone(),
            message: format!("Failed to read template: {}", e),
        })?;

        let variants = variants
            .into_iter()
            .map(|variant| {
                let colorized = colorize(&source, variant.colour);
                (variant, colorized)
            })
            .collect();

        Ok(Prepared { variants })
    }

    fn produce(
        &self,
        rasterizer: &dyn Rasterizer,
        svg: &str,
        size: &SizeSpec,
        output_name: &str,
    ) -> Result<()> {
        let bytes = rasterizer.rasterize(svg, size.size, size.size)?;

        let path = self.output_dir.join(output_name);
        fs::write(&path, bytes).map_err(|e| IconError::Io {
            path,
            message: format!("Failed to write icon: {}", e),
        })
    }
}
