//! # diploma-gen CLI
//!
//! ```bash
//! # Export a diploma with the remembered course and signatories
//! diploma-gen export --student "Juan Pérez" --style formal
//!
//! # Make the course title bigger and write to a specific directory
//! diploma-gen export --student "Ana" --scale course=1.4 --out ./diplomas
//!
//! # Show what would be rendered
//! diploma-gen show --style modern
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use diploma_gen::{
    config::Config,
    export::Exporter,
    layout::PreviewRenderer,
    raster::GlyphRasterizer,
    settings::SettingsPanel,
    store::{JsonFileStore, KeyValueStore},
    style::StylePicker,
    FieldRole, Studio, TemplateVariant,
};

/// Generate letter-size diploma PDFs
#[derive(Parser, Debug)]
#[command(name = "diploma-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (fonts, logo, letterhead)
    #[arg(long, global = true, default_value = "diploma-gen.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct DiplomaArgs {
    /// Student name
    #[arg(long)]
    student: Option<String>,

    /// Course grade, e.g. "PRIMER GRADO"
    #[arg(long)]
    grade: Option<String>,

    /// Course name
    #[arg(long)]
    course: Option<String>,

    /// Date line, defaults to today in Spanish long form
    #[arg(long)]
    date: Option<String>,

    /// Director's name
    #[arg(long)]
    director: Option<String>,

    /// Secretary's name
    #[arg(long)]
    secretary: Option<String>,

    /// Template variant: classic, modern, elegant or formal
    #[arg(long, default_value = "classic")]
    style: TemplateVariant,

    /// Font scale for a field, e.g. `course=1.4` (repeatable)
    #[arg(long = "scale", value_name = "FIELD=VALUE", value_parser = parse_scale)]
    scales: Vec<(FieldRole, f32)>,
}

impl DiplomaArgs {
    fn edits(&self) -> impl Iterator<Item = (FieldRole, &String)> {
        [
            (FieldRole::StudentName, &self.student),
            (FieldRole::CourseGrade, &self.grade),
            (FieldRole::CourseName, &self.course),
            (FieldRole::Date, &self.date),
            (FieldRole::DirectorName, &self.director),
            (FieldRole::SecretaryName, &self.secretary),
        ]
        .into_iter()
        .filter_map(|(role, value)| value.as_ref().map(|v| (role, v)))
    }

    fn apply<S: KeyValueStore>(&self, studio: &mut Studio<S>) {
        for (role, value) in self.edits() {
            studio.edit(role, value.as_str());
        }
        studio.select_variant(self.style);

        if !self.scales.is_empty() {
            studio.open_settings();
            for (role, value) in self.scales.iter() {
                studio.set_scale(*role, *value);
            }
            studio.close_settings();
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a diploma and save it as a PDF
    Export {
        #[command(flatten)]
        diploma: DiplomaArgs,

        /// Output directory (defaults to the configured one)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Print the diploma's fields and the font sizes they render at
    Show {
        #[command(flatten)]
        diploma: DiplomaArgs,
    },

    /// List the available template variants
    Styles,
}

fn parse_scale(s: &str) -> Result<(FieldRole, f32), String> {
    let (role, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{s}'"))?;
    let role: FieldRole = role.parse()?;
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid scale '{value}': {e}"))?;
    Ok((role, value))
}

fn main() {
    diploma_gen::init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Commands::Export { diploma, out } => {
            let mut studio = Studio::open(JsonFileStore::open(&config.store_path));
            diploma.apply(&mut studio);

            let rasterizer =
                GlyphRasterizer::from_config(&config).context("preparing the rasterizer")?;
            let exporter = Exporter::new(rasterizer)
                .with_scale(config.raster_scale)
                .with_issuer(config.letterhead.institution.as_str());

            let scene = studio.preview(&PreviewRenderer::new(config.letterhead.clone()));
            let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
            let path = exporter.export(&scene, &studio.document().student_name, &out_dir)?;
            println!("{}", path.display());
        }
        Commands::Show { diploma } => {
            let mut studio = Studio::open(JsonFileStore::open(&config.store_path));
            diploma.apply(&mut studio);

            let sizes = studio.rendered_sizes();
            println!("Estilo: {}", studio.style_picker().selected());
            for field in studio.editor_fields() {
                let remembered = if field.role.is_remembered() { "*" } else { " " };
                println!(
                    "{} {:<20} {:<40} {:.3}rem",
                    remembered,
                    field.label,
                    field.value,
                    sizes.get(field.role).0
                );
            }

            println!();
            println!("{}", SettingsPanel::TITLE);
            for row in studio.sliders() {
                println!("  {:<20} {}", row.label, row.readout);
            }
        }
        Commands::Styles => {
            for option in StylePicker::default().options() {
                let marker = if option.selected { "*" } else { " " };
                println!("{} {}", marker, option.label);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_arguments_parse() {
        assert_eq!(parse_scale("course=1.4"), Ok((FieldRole::CourseName, 1.4)));
        assert_eq!(parse_scale("Student= 2"), Ok((FieldRole::StudentName, 2.0)));
        assert!(parse_scale("course").is_err());
        assert!(parse_scale("nope=1").is_err());
        assert!(parse_scale("date=big").is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn export_flags_are_collected() {
        let cli = Cli::parse_from([
            "diploma-gen",
            "export",
            "--student",
            "Ana",
            "--style",
            "formal",
            "--scale",
            "course=1.4",
            "--scale",
            "date=0.8",
        ]);
        let Commands::Export { diploma, out } = cli.command else {
            panic!("expected export");
        };
        assert_eq!(diploma.style, TemplateVariant::Formal);
        assert_eq!(diploma.scales.len(), 2);
        assert_eq!(out, None);
        assert_eq!(
            diploma.edits().collect::<Vec<_>>(),
            vec![(FieldRole::StudentName, &"Ana".to_string())]
        );
    }
}
