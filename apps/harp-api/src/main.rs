use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = harp_api::Args::parse();
	harp_api::run(args).await
}
