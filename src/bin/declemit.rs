//! Declaration emitter driver.
//!
//! Reads a declaration listing and writes the unit's header, implementation
//! and (optionally) initializer files.

use bumpalo::Bump;
use clap::Parser;
use decl_emit::{parse_listing, EmitConfig, EmitError, SymbolTable, UnitEmitter};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "declemit", version, about = "Order and place translated C declarations")]
struct Args {
    /// Declaration listing to read
    input: PathBuf,

    /// Header file to write
    #[arg(long)]
    header: PathBuf,

    /// Implementation file to write
    #[arg(long)]
    source: PathBuf,

    /// Initializer fragments file to write
    #[arg(long)]
    init: Option<PathBuf>,

    /// Wrap the header in an include guard with this macro name
    #[arg(long)]
    guard: Option<String>,

    /// Functions with a complexity below this value are emitted inline
    #[arg(long, default_value_t = decl_emit::DEFAULT_INLINE_THRESHOLD)]
    inline_threshold: u32,

    /// Print emission statistics
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let text = fs::read_to_string(&args.input)?;
    let config = EmitConfig::with_inline_threshold(args.inline_threshold);

    let arena = Bump::new();
    let symbols = SymbolTable::new(&arena);
    let set = match parse_listing(&text, &symbols, &config) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("{}:{}", args.input.display(), e);
            std::process::exit(1);
        }
    };

    let sealed = set.seal();
    let order = match sealed.emission_order() {
        Ok(order) => order,
        Err(EmitError::CycleDetected { symbol }) => {
            eprintln!(
                "Error: direct dependency cycle through '{}'",
                symbols.name(symbol).unwrap_or("<unknown>")
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let mut header = BufWriter::new(File::create(&args.header)?);
    if let Some(guard) = &args.guard {
        write!(header, "#ifndef {guard}\n#define {guard}\n\n")?;
    }
    let source = BufWriter::new(File::create(&args.source)?);

    let mut emitter = UnitEmitter::new(header, source);
    emitter.emit(&order)?;
    if let Some(path) = &args.init {
        let mut init = BufWriter::new(File::create(path)?);
        emitter.write_inits(&order, &mut init)?;
    }

    let stats = emitter.stats().clone();
    let (mut header, _) = emitter.into_inner();
    if let Some(guard) = &args.guard {
        write!(header, "\n#endif /* {guard} */\n")?;
    }
    header.flush()?;

    log::info!(
        "wrote {} and {}",
        args.header.display(),
        args.source.display()
    );
    if args.stats {
        print!("{}", stats);
    }
    Ok(())
}

/// Level forced by `-v` flags. Without flags `RUST_LOG` decides.
fn verbosity_level(verbose: u8) -> Option<log::LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = verbosity_level(verbose) {
        builder.filter_level(level);
    }
    builder.init();
}
