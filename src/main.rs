mod app;
mod kg;
mod util;

use std::path::PathBuf;

use clap::Parser;

use app::GraphSource;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Graph JSON file exported from the knowledge-graph backend
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Seed for the built-in demo graph, used when --graph is absent
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = match args.graph {
        Some(path) => GraphSource::File(path),
        None => GraphSource::Demo { seed: args.seed },
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "biokg-view",
        options,
        Box::new(move |cc| Ok(Box::new(app::KgViewApp::new(cc, source.clone())))),
    )
}
