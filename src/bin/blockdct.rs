//! blockdct CLI - drives the DCT/quantization round trip over one block
//! and prints every intermediate matrix.
//!
//! The numeric core never prints; this binary is the display collaborator.

use clap::{Parser, ValueEnum};

use blockdct::quantization::{scaled_quant_table, std_luminance_table};
use blockdct::{BLOCK_SIZE, BlockSource, Pipeline};

/// Block DCT round-trip demonstrator
#[derive(Parser)]
#[command(name = "blockdct")]
#[command(author = "blockdct contributors")]
#[command(version)]
#[command(
    about = "Runs one block through forward DCT, quantization, dequantization, and inverse DCT",
    long_about = None
)]
#[command(after_help = "EXAMPLES:
    blockdct
    blockdct --input flat --fill 100
    blockdct --input flat --fill 100 --size 16
    blockdct --quality 25")]
struct Cli {
    /// Input block to transform
    #[arg(short, long, default_value = "reference", value_enum)]
    input: InputBlock,

    /// Fill value for the flat input block
    #[arg(short, long, default_value = "100")]
    fill: f32,

    /// Block dimension (flat input only; the reference block is 8x8)
    #[arg(short, long, default_value = "8")]
    size: usize,

    /// Quality factor 1-100 applied to the standard luminance table
    /// (50 keeps the table unscaled)
    #[arg(short, long, default_value = "50")]
    quality: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputBlock {
    /// Built-in 8x8 sample block with values in the 50..52 range
    Reference,
    /// Constant-filled block
    Flat,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> blockdct::Result<()> {
    let (source, dim) = match cli.input {
        InputBlock::Reference => (BlockSource::Reference, BLOCK_SIZE),
        InputBlock::Flat => (BlockSource::Flat(cli.fill), cli.size),
    };
    let base = if dim == BLOCK_SIZE {
        std_luminance_table()
    } else {
        // the standard table is 8x8 only; other sizes get a uniform grid
        blockdct::Matrix::filled(dim, 16.0)?
    };
    let table = scaled_quant_table(&base, cli.quality)?;

    let pipeline = Pipeline::new(dim, table, source)?;
    let trip = pipeline.run()?;

    println!("matrix A");
    println!("{}", trip.input);
    println!("matrix B = U * A * U'");
    println!("{}", trip.coefficients);
    println!("quantized matrix B");
    println!("{}", trip.quantized);
    println!("dequantized matrix B");
    println!("{}", trip.dequantized);
    println!("matrix A = U' * B * U");
    println!("{}", trip.reconstructed);

    Ok(())
}
