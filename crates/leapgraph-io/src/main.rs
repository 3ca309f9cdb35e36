use clap::Parser;
use leapgraph_io::cli::{run_simulate_command, Cli, Commands};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            nodes,
            dt,
            ticks,
            entities,
            signal,
            amplitude,
            period,
            save_stride,
            seed,
            out,
            params,
        } => {
            run_simulate_command(
                nodes,
                dt,
                ticks,
                entities,
                signal,
                amplitude,
                period,
                save_stride,
                seed,
                out,
                params,
            )?;
        }
    }

    Ok(())
}
