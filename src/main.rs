use std::error::Error;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};

use glyphcaster::config::{load_config, AppConfig};
use glyphcaster::renderer::{eye_position, FrameBuffer, FrameRenderer};
use glyphcaster::terminal::{parse_key_event, status_line, Action, Minimap, TerminalDisplay};
use glyphcaster::{Bullet, Camera, Map, World};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Everything the frame loop needs, built once from the configuration.
struct Session {
    config: AppConfig,
    map: Map,
    world: World,
    camera: Camera,
    renderer: FrameRenderer,
}

impl Session {
    fn new(config: AppConfig) -> Result<Self, Box<dyn Error>> {
        config.validate()?;

        let map = Map::parse(&config.world.map)?;
        let world = World::from_map(&map, &config.world, &config.colors)?;
        let renderer = FrameRenderer::new(config.screen, config.view)?;

        let (x, y) = map.spawn_point(config.world.cell_size);
        let camera = Camera::new(eye_position(x, y, config.world.wall_height), 0.0)
            .with_speeds(config.player.speed, config.player.rotation_speed);
        info!(
            "Player spawns at ({:.2}, {:.2}); screen {}x{}, depth {}",
            x, y, config.screen.width, config.screen.height, config.view.depth
        );

        Ok(Self {
            config,
            map,
            world,
            camera,
            renderer,
        })
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logger(args.debug_level.clone().into(), args.log_file.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }

    info!("Glyphcaster - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            load_config(path)?
        }
        None => AppConfig::default(),
    };
    if let Some(width) = args.width {
        config.screen.width = width;
    }
    if let Some(height) = args.height {
        config.screen.height = height;
    }

    let mut session = Session::new(config)?;

    if let Some(path) = &args.dump {
        let frame = session.renderer.render(&session.camera, &session.world);
        std::fs::write(path, frame.to_text())?;
        info!("Wrote frame to {}", path.display());
        return Ok(());
    }

    if args.bench {
        run_benchmark(&mut session, args.frames);
        return Ok(());
    }

    run_interactive(&mut session)
}

/// Input, move, advance bullets, render, present; repeated until the player
/// quits.
fn run_interactive(session: &mut Session) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalDisplay::new()?;
    let (columns, rows) = terminal.frame_size()?;
    if columns < session.config.screen.width || rows < session.config.screen.height {
        warn!(
            "Terminal is {}x{} but frames are {}x{}; output will be clipped",
            columns, rows, session.config.screen.width, session.config.screen.height
        );
    }
    let mut frame = FrameBuffer::new(session.config.screen.width, session.config.screen.height);
    let cell_size = session.config.world.cell_size;

    let mut last_frame = Instant::now();
    loop {
        let dt = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();

        while let Some(key_event) = terminal.poll_input(Duration::ZERO)? {
            let camera = &mut session.camera;
            match parse_key_event(key_event) {
                Action::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Action::Forward => {
                    if !camera.try_move(1.0, dt, &session.map, cell_size) {
                        debug!("Forward move blocked at {:?}", camera.position);
                    }
                }
                Action::Backward => {
                    if !camera.try_move(-1.0, dt, &session.map, cell_size) {
                        debug!("Backward move blocked at {:?}", camera.position);
                    }
                }
                Action::TurnLeft => camera.rotate(-1.0, dt),
                Action::TurnRight => camera.rotate(1.0, dt),
                Action::Fire => session.world.fire(Bullet::fired_from(camera)),
                Action::None => {}
            }
        }
        session.world.advance_bullets(dt, &session.map, cell_size);

        session
            .renderer
            .render_into(&session.camera, &session.world, &mut frame);

        let camera = &session.camera;
        let minimap = Minimap::new(&session.map, &session.world, camera, cell_size);
        let status = status_line(camera.position.x(), camera.position.y(), camera.heading, dt);
        terminal.present(&frame, &minimap, &status)?;

        // Keep an idle loop from spinning when frames are very cheap
        std::thread::sleep(Duration::from_millis(1));
    }
}

/// Render frames headless while the camera turns in place.
fn run_benchmark(session: &mut Session, frames: u32) {
    info!(
        "Starting benchmark: {} frames at {}x{} against {} objects",
        frames,
        session.config.screen.width,
        session.config.screen.height,
        session.world.len()
    );

    let pb = ProgressBar::new(frames as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
        pb.set_style(style);
    }

    let mut frame = FrameBuffer::new(session.config.screen.width, session.config.screen.height);
    let step = std::f32::consts::TAU / frames.max(1) as f32;
    let start = Instant::now();
    for _ in 0..frames {
        session.camera.heading += step;
        session
            .renderer
            .render_into(&session.camera, &session.world, &mut frame);
        pb.inc(1);
    }
    pb.finish();

    let elapsed = start.elapsed();
    let per_frame = elapsed.as_secs_f32() / frames.max(1) as f32;
    info!("================== BENCHMARK RESULTS ==================");
    info!("Frames:      {}", frames);
    info!("Total:       {:.2?}", elapsed);
    info!("Per frame:   {:.3} ms", per_frame * 1000.0);
    if per_frame > 0.0 {
        info!("Throughput:  {:.1} FPS", 1.0 / per_frame);
    }
}
