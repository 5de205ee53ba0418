use argh::FromArgs;
use std::path::PathBuf;
use std::time::Instant;

use morph::image::RgbImage;
use morph::io::png as png_io;
use morph::ops::{sequential, tiled, EdgePolicy, KernelId, MorphError, Operation, StructuringElement};

mod bench;

#[derive(FromArgs)]
/// Apply morphological erosion or dilation to a PNG image
struct Args {
    /// path to an input PNG image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output PNG image (default: out.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"out.png\")")]
    output: PathBuf,

    /// operation to apply: erode or dilate (default: erode)
    #[argh(option, default = "String::from(\"erode\")")]
    op: String,

    /// structuring element id, 1..=5 (default: 1)
    #[argh(option, default = "1")]
    se: u8,

    /// edge policy: ignore or pad (default: ignore)
    #[argh(option, default = "String::from(\"ignore\")")]
    edge: String,

    /// execution mode: seq or par (default: seq)
    #[argh(option, default = "String::from(\"seq\")")]
    mode: String,

    /// number of worker threads in par mode (default: 8)
    #[argh(option, short = 'j', default = "8")]
    threads: usize,

    /// measure repeated runs and report mean and standard deviation
    #[argh(switch)]
    bench: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();
    env_logger::init();

    let op = match args.op.as_str() {
        "erode" => Operation::Erosion,
        "dilate" => Operation::Dilation,
        other => return Err(format!("unknown operation '{other}', expected erode|dilate").into()),
    };

    let edge = match args.edge.as_str() {
        "ignore" => EdgePolicy::Ignore,
        "pad" => EdgePolicy::Pad,
        other => return Err(format!("unknown edge policy '{other}', expected ignore|pad").into()),
    };

    let parallel = match args.mode.as_str() {
        "seq" => false,
        "par" => true,
        other => return Err(format!("unknown mode '{other}', expected seq|par").into()),
    };

    let kernel_id = KernelId::from_id(args.se)?;
    let se = kernel_id.build();

    let image = png_io::read_image_png_rgb8(&args.input)?;

    log::info!(
        "mode={} op={} se={} edge={} threads={} input={} output={}",
        args.mode,
        args.op,
        kernel_id.name(),
        args.edge,
        args.threads,
        args.input.display(),
        args.output.display()
    );

    let result = if args.bench {
        let (result, stats) =
            bench::time_runs(|| run(&image, parallel, op, &se, edge, args.threads))?;
        log::info!(
            "mean time: {:.3} ms (std {:.3} ms) over {} runs",
            stats.mean_ms,
            stats.std_ms,
            stats.runs
        );
        result
    } else {
        let start = Instant::now();
        let result = run(&image, parallel, op, &se, edge, args.threads)?;
        log::info!("time: {:.3} ms", start.elapsed().as_secs_f64() * 1e3);
        result
    };

    png_io::write_image_png_rgb8(&args.output, &result)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

fn run(
    src: &RgbImage,
    parallel: bool,
    op: Operation,
    se: &StructuringElement,
    edge: EdgePolicy,
    threads: usize,
) -> Result<RgbImage, MorphError> {
    let mut dst = RgbImage::from_size_val(src.size(), 0);

    if parallel {
        tiled::apply_to_image(src, &mut dst, op, se, edge, threads)?;
    } else {
        sequential::apply_to_image(src, &mut dst, op, se, edge)?;
    }

    Ok(dst)
}
