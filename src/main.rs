//! Lane Merge entry point
//!
//! The browser build is driven from `lane_merge::web`. Natively this runs the
//! autopilot headless and reports how the run went.
//!
//! Usage: `lane-merge [seed] [max_ticks] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lane Merge (native) starting...");

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is lane_merge::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{name} must be a number, got '{value}'")]
    BadNumber { name: &'static str, value: String },

    #[error("cannot read {path}: {source}")]
    ReadTuning {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Tuning(#[from] lane_merge::TuningError),
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    name: &'static str,
    default: T,
) -> Result<T, CliError> {
    match args.get(index) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| CliError::BadNumber {
            name,
            value: value.clone(),
        }),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(args: Vec<String>) -> Result<(), CliError> {
    use lane_merge::driver::FrameDriver;
    use lane_merge::sim::GameEvent;
    use lane_merge::sim::autopilot::choose_steer;
    use lane_merge::{Engine, Tuning};

    let seed: u64 = parse_arg(&args, 0, "seed", 12345)?;
    let max_ticks: u64 = parse_arg(&args, 1, "max_ticks", 20_000)?;
    let tuning = match args.get(2) {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| CliError::ReadTuning {
                path: path.clone(),
                source,
            })?;
            Tuning::from_json(&json)?
        }
        None => Tuning::default(),
    };

    let mut driver = FrameDriver::new(tuning.timing);
    let mut engine = Engine::new(tuning, seed)?;
    log::info!("seed {seed}, up to {max_ticks} ticks, {:?}", driver.mode());

    let (mut coins, mut merges, mut crushes) = (0u32, 0u32, 0u32);
    let mut ticks = 0u64;
    // Pretend the host runs at 60 fps
    let frame_dt = 1.0 / 60.0;

    'frames: while ticks < max_ticks && !engine.is_over() {
        if let Some(direction) = choose_steer(engine.state()) {
            engine.steer(direction);
        }
        for _ in 0..driver.ticks_for_frame(frame_dt) {
            for event in engine.tick() {
                match event {
                    GameEvent::CoinCollected { .. } => coins += 1,
                    GameEvent::Merged { rank } => {
                        merges += 1;
                        log::info!("tick {ticks}: merged, now rank {rank}");
                    }
                    GameEvent::Crushed { .. } => crushes += 1,
                    GameEvent::Crashed { rank } => {
                        log::info!("tick {ticks}: crashed into rank {rank}");
                    }
                    GameEvent::Spawned { .. } => {}
                }
            }
            ticks += 1;
            if ticks >= max_ticks || engine.is_over() {
                break 'frames;
            }
        }
    }

    let snapshot = engine.snapshot();
    println!("ticks:   {ticks}");
    println!("score:   {}", snapshot.score);
    println!("rank:    {}", snapshot.player_rank);
    println!("merges:  {merges}  crushes: {crushes}  coins: {coins}");
    println!("speed:   {:.3}", snapshot.speed);
    match snapshot.message {
        Some(message) if snapshot.is_over => println!("result:  {message}"),
        _ => println!("result:  survived"),
    }
    Ok(())
}
