use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signforge::catalog::charts;
use signforge::extract::chart::{ExtractOpts, extract_chart, extraction_manifest};
use signforge::generate::{self, AlphabetStyle};
use signforge::ingest;
use signforge::verify::{fs as fs_check, http, report::Report};

#[derive(Parser, Debug)]
#[command(name = "signforge", version, about = "Generate, crop, and verify ASL sign assets")]
struct Cli {
    /// Asset root to write into or verify (repeatable; defaults to the
    /// project's public and frontend sign directories).
    #[arg(long = "root", global = true)]
    roots: Vec<PathBuf>,

    /// Verbose logging (or set RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the 26 alphabet cards.
    Alphabet(AlphabetArgs),
    /// Generate the 53 dictionary cards and their metadata manifest.
    Dictionary(DictionaryArgs),
    /// Crop a printed sign chart into individual sign images.
    Extract(ExtractArgs),
    /// Import externally-sourced letter images into the asset tree.
    Import(ImportArgs),
    /// Check generated assets on disk and on the dev server.
    Verify(VerifyArgs),
}

#[derive(Parser, Debug)]
struct AlphabetArgs {
    /// Card style.
    #[arg(long, value_enum, default_value_t = StyleChoice::Svg)]
    style: StyleChoice,

    /// Also rasterize each card to a PNG.
    #[arg(long)]
    raster: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    /// Layered hand illustration.
    Svg,
    /// Large emoji glyph.
    Emoji,
}

#[derive(Parser, Debug)]
struct DictionaryArgs {
    /// Also rasterize each card to a PNG.
    #[arg(long)]
    raster: bool,
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Chart layout name: alphabet, alphabet-6x5, dictionary, common, or
    /// illustrated.
    #[arg(long)]
    chart: String,

    /// Chart image to crop.
    #[arg(long)]
    image: PathBuf,

    /// Output edge length in pixels.
    #[arg(long, default_value_t = 200)]
    size: u32,

    /// Pixels trimmed from every cell edge.
    #[arg(long, default_value_t = 8)]
    padding: u32,

    /// Subdirectory under each root for the crops.
    #[arg(long, default_value = "common")]
    subdir: String,

    /// Write an extraction metadata manifest to this path.
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ImportArgs {
    /// Letter image, or a directory of A.png..Z.png scans when --letter is
    /// omitted.
    image: PathBuf,

    /// The letter this image represents (A-Z).
    #[arg(long)]
    letter: Option<String>,

    /// Output edge length in pixels.
    #[arg(long, default_value_t = 150)]
    size: u32,
}

#[derive(Parser, Debug)]
struct VerifyArgs {
    /// Dev server base URL.
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    /// Only check the filesystem, skip HTTP checks.
    #[arg(long)]
    skip_http: bool,

    /// Write a preview montage of sample crops to this path.
    #[arg(long)]
    preview: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let roots: Vec<PathBuf> = if cli.roots.is_empty() {
        signforge::DEFAULT_ROOTS.iter().map(PathBuf::from).collect()
    } else {
        cli.roots.clone()
    };

    match cli.cmd {
        Command::Alphabet(args) => cmd_alphabet(args, &roots),
        Command::Dictionary(args) => cmd_dictionary(args, &roots),
        Command::Extract(args) => cmd_extract(args, &roots),
        Command::Import(args) => cmd_import(args, &roots),
        Command::Verify(args) => cmd_verify(args, &roots),
    }
}

fn cmd_alphabet(args: AlphabetArgs, roots: &[PathBuf]) -> anyhow::Result<()> {
    let style = match args.style {
        StyleChoice::Svg => AlphabetStyle::Illustrated,
        StyleChoice::Emoji => AlphabetStyle::Emoji,
    };
    let written = generate::generate_alphabet(roots, style, args.raster)?;
    for root in roots {
        println!("wrote {written} alphabet cards to {}", root.join("alphabet").display());
    }
    Ok(())
}

fn cmd_dictionary(args: DictionaryArgs, roots: &[PathBuf]) -> anyhow::Result<()> {
    let written = generate::generate_dictionary(roots, args.raster)?;
    for root in roots {
        println!(
            "wrote {written} dictionary cards to {} (+ {})",
            root.join("dictionary").display(),
            generate::MANIFEST_FILE
        );
    }
    Ok(())
}

fn cmd_extract(args: ExtractArgs, roots: &[PathBuf]) -> anyhow::Result<()> {
    let layout = charts::layout(&args.chart).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown chart '{}' (available: {})",
            args.chart,
            charts::CHART_NAMES.join(", ")
        )
    })?;

    let opts = ExtractOpts {
        size: args.size,
        padding: args.padding,
    };
    let target_dirs: Vec<PathBuf> = roots.iter().map(|root| root.join(&args.subdir)).collect();
    let outcome = extract_chart(&args.image, &layout, &target_dirs, &opts)?;

    for (name, (col, row)) in &outcome.written {
        println!("extracted {name} from cell ({col}, {row})");
    }
    for (name, err) in &outcome.failed {
        println!("FAILED {name}: {err}");
    }
    println!(
        "{} of {} cells extracted",
        outcome.written.len(),
        layout.cells.len()
    );

    if let Some(manifest_path) = &args.manifest {
        let manifest = extraction_manifest(&outcome, &layout, &args.image);
        manifest.write(manifest_path)?;
        println!("wrote extraction manifest to {}", manifest_path.display());
    }

    if outcome.written.is_empty() {
        anyhow::bail!("no cells could be extracted from '{}'", args.image.display());
    }
    Ok(())
}

fn cmd_import(args: ImportArgs, roots: &[PathBuf]) -> anyhow::Result<()> {
    match &args.letter {
        Some(letter) => {
            let letter = ingest::parse_letter(letter)?;
            let written = ingest::import_letter(&args.image, letter, roots, args.size)?;
            for path in written {
                println!("wrote {}", path.display());
            }
        }
        None => {
            let outcome = ingest::import_alphabet_dir(&args.image, roots, args.size)?;
            for letter in &outcome.imported {
                println!("imported {letter}");
            }
            for (letter, err) in &outcome.failed {
                println!("FAILED {letter}: {err}");
            }
            if !outcome.missing.is_empty() {
                let missing: String = outcome.missing.iter().collect();
                println!("missing source images for: {missing}");
            }
            if outcome.imported.is_empty() {
                anyhow::bail!(
                    "no letter images found under '{}'",
                    args.image.display()
                );
            }
        }
    }
    Ok(())
}

fn cmd_verify(args: VerifyArgs, roots: &[PathBuf]) -> anyhow::Result<()> {
    let mut report = Report::default();

    for root in roots {
        fs_check::check_alphabet_dir(&root.join("alphabet"), &mut report);
        fs_check::check_dictionary_dir(
            &root.join("dictionary"),
            &root.join(generate::MANIFEST_FILE),
            &mut report,
        );
    }

    if let Some(preview) = &args.preview {
        match fs_check::write_preview_montage(&roots[0].join("common"), preview) {
            Ok(placed) => println!("wrote preview montage ({placed} tiles) to {}", preview.display()),
            Err(err) => report.fail("preview montage", err.to_string()),
        }
    }

    if !args.skip_http {
        let checker = http::HttpChecker::new(&args.base_url)?;
        if checker.check_server(&mut report) {
            checker.check_assets(http::default_asset_paths(), &mut report);
            checker.check_manifest("images/signs/aslDictionaryData.json", &mut report);
        }
    }

    report.print_summary("verification");
    if report.is_success() {
        Ok(())
    } else {
        anyhow::bail!("{} of {} checks failed", report.failed(), report.len())
    }
}
