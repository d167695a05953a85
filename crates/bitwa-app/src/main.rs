use std::process;

use log::{error, info};

use bitwa_app::config::parse_args;
use bitwa_app::error::AppError;
use bitwa_app::game_loop::{join_game_loop, spawn_game_loop, watch_for_close};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{err}");
        eprintln!("bitwa: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        return Ok(());
    };

    let realtime = config.loop_settings.realtime;
    let (commands, handle) = spawn_game_loop(config.sim, config.loop_settings)?;
    if realtime {
        std::thread::Builder::new()
            .name("bitwa-close-watcher".into())
            .spawn(move || watch_for_close(std::io::stdin().lock(), &commands))
            .map_err(AppError::Thread)?;
    }
    let summary = join_game_loop(handle)?;

    let score = summary.score;
    info!(
        "seed {}: {} frames, {:.2}s simulated, {} draw calls",
        summary.seed, summary.frames, summary.sim_time, summary.draw_calls
    );
    println!(
        "ships destroyed {}/{} | plasma fired {} | enemy shots {}",
        score.ships_destroyed, score.ships_spawned, score.plasma_fired, score.enemy_shots
    );
    Ok(())
}
