use anyhow::Result;
use clap::Parser;
use leapgraph_neuro::ModulatedEngine;

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive one modulated entity through a scripted sequence of events")]
struct Args {
    #[arg(long, default_value_t = 6)]
    nodes: usize,

    #[arg(long, default_value_t = 400)]
    ticks: usize,

    #[arg(long, default_value_t = 0.1)]
    dt: f64,

    #[arg(long, default_value_t = 7)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut npc = ModulatedEngine::new(args.nodes, args.seed)?;

    let timeline = [
        (50usize, "praise"),
        (120, "insult_god"),
        (200, "comfort"),
        (260, "taboo_violation"),
        (320, "ritual_success"),
    ];

    println!("Running {} ticks on {} nodes (seed {})", args.ticks, args.nodes, args.seed);
    println!();

    let mut leaps = 0;
    for tick in 0..args.ticks {
        if let Some((_, id)) = timeline.iter().find(|(at, _)| *at == tick) {
            npc.apply_event(id);
            println!("-- event at tick {}: {}", tick, id);
        }

        let t = tick as f64 * args.dt;
        let drive = 0.8 + 0.4 * (0.05 * t).sin();
        let telemetry = npc.tick(drive, args.dt);

        if telemetry.did_jump {
            leaps += 1;
        }
        if tick % 20 == 0 || telemetry.did_jump {
            println!(
                "{:>4}  node {:>2}  heat {:>7.4}  T {:>6.3}  rate {:>7.4}{}",
                tick,
                telemetry.current,
                telemetry.heat,
                telemetry.temperature,
                telemetry.jump_rate,
                if telemetry.did_jump { "  LEAP" } else { "" }
            );
        }
    }

    println!();
    println!(
        "{} leaps over {} ticks; final node {}, heat {:.4}",
        leaps,
        args.ticks,
        npc.current_node(),
        npc.heat()
    );
    let levels = npc.neuro.levels;
    println!(
        "final channels: DA {:.2}  5HT {:.2}  NE {:.2}  AD {:.2}  END {:.2}  OXT {:.2}  CORT {:.2}",
        levels.da, levels.s5, levels.ne, levels.ad, levels.end, levels.oxt, levels.cort
    );

    Ok(())
}
