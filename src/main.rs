//! Headless voxview demo.
//!
//! Drives a player camera, a third-person camera and a tracking camera
//! through a scripted session, feeding HUD snapshots to the overlay
//! compositor and logging what a renderer would draw.
//!
//! Usage: `voxview [options.toml]`. Set `RUST_LOG=info` to see the output.

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use voxview::camera::{Camera, GroundPlaneFocus, PlayerController, PlayerRig};
use voxview::hud::{self, FrameInfo, HudCompositor, HudData};
use voxview::lighting::{Light, LightBlock};
use voxview::options::Options;
use voxview::scene::{GameObject, ObjectId, SceneObjects};
use voxview::util::frame_timing::FrameClock;
use voxview::VoxviewError;

const FRAMES: u32 = 240;
const VIEWPORT: (u32, u32) = (1280, 720);

/// `(frame, key, pressed)` events replayed through the keybindings.
const SCRIPT: &[(u32, &str, bool)] = &[
    (0, "KeyW", true),
    (60, "KeyW", false),
    (60, "ArrowLeft", true),
    (90, "ArrowLeft", false),
    (90, "Space", true),
    (110, "Space", false),
    (120, "KeyD", true),
    (150, "KeyD", false),
    (150, "Equal", true),
    (170, "Equal", false),
    (200, "KeyZ", true),
    (210, "KeyR", true),
    (220, "KeyV", true),
];

fn load_options() -> Options {
    let Some(path) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(opts) => {
            log::info!("loaded options from {path}");
            opts
        }
        Err(e) => {
            log::error!("failed to load options from {path}: {e}");
            Options::default()
        }
    }
}

fn build_lights(options: &Options) -> Result<LightBlock, VoxviewError> {
    LightBlock::validate_layout(LightBlock::SIZE)?;
    let mut block = LightBlock::from_options(&options.lighting);
    for (i, x) in [-8.0, 0.0, 8.0].into_iter().enumerate() {
        let color = [1.0, 0.6 + 0.2 * i as f32, 0.3];
        let _ = block.push(Light::point(Vec3::new(x, 4.0, -6.0), color, 1.5, 0.05));
    }
    for slot in 0..block.active_count() {
        if let Some(light) = block.get(slot) {
            log::debug!("light {slot}: {light}");
        }
    }
    Ok(block)
}

/// Walk the followed mob around a circle.
fn move_mob(objects: &mut SceneObjects, mob: ObjectId, time: f64) {
    let angle = time as f32 * 0.8;
    let position = Vec3::new(6.0 * angle.cos(), 0.0, 6.0 * angle.sin());
    let heading = Vec3::new(-angle.sin(), 0.0, angle.cos());
    if let Some(obj) = objects.get_mut(mob) {
        *obj = GameObject::new(position, heading);
    }
}

fn run() -> Result<(), VoxviewError> {
    let options = load_options();

    let mut objects = SceneObjects::new();
    let mob = objects.spawn(GameObject::new(Vec3::new(6.0, 0.0, 0.0), Vec3::Z));

    let rig = PlayerRig::new(Vec3::new(0.0, 1.7, 10.0), 1.5 * std::f32::consts::PI, 0.45)
        .with_auto_focus(GroundPlaneFocus {
            ground_y: 0.0,
            fallback: 100.0,
        });
    let mut cameras = [
        Camera::player(rig),
        Camera::third_person(mob, Vec3::new(-4.0, 2.0, 0.0)),
        Camera::fixed_tracking(mob, Vec3::new(0.0, 12.0, 0.0)),
    ];
    for camera in &mut cameras {
        camera.configure(&options.camera);
    }
    let mut controller = PlayerController::new(&options.camera);

    let lights = build_lights(&options)?;
    log::info!(
        "{} lights active ({} byte block)",
        lights.active_count(),
        lights.as_bytes().len()
    );

    let (mut publisher, reader) = hud::channel();
    let mut compositor = HudCompositor::spawn(reader, &options.hud)?;

    let aspect = VIEWPORT.0 as f32 / VIEWPORT.1 as f32;
    let mut clock = FrameClock::new(60);
    for frame in 0..FRAMES {
        while !clock.should_render() {
            std::thread::sleep(Duration::from_millis(1));
        }
        let (time, delta) = clock.tick();

        for &(_, key, pressed) in SCRIPT.iter().filter(|(f, _, _)| *f == frame) {
            let bound = if pressed {
                controller.press_key(key, &options.keybindings)
            } else {
                controller.release_key(key, &options.keybindings)
            };
            if !bound {
                log::warn!("no action bound to {key}");
            }
        }
        if (170..190).contains(&frame) {
            controller.look(3.0, -1.0);
        }

        move_mob(&mut objects, mob, time);
        let [player, ..] = &mut cameras;
        controller.apply(player, delta as f32);
        for camera in &mut cameras {
            camera.update(time, delta, aspect, &objects);
        }

        let info = FrameInfo {
            time,
            delta,
            width: VIEWPORT.0,
            height: VIEWPORT.1,
            paused: false,
        };
        publisher.publish(HudData::capture(&info, &cameras[0]));

        if frame % 60 == 59 {
            for (name, camera) in ["player", "third-person", "tracking"].iter().zip(&cameras) {
                log::info!(
                    "{name}: position {:.2} direction {:.2} focus {:.2} zoom {}",
                    camera.position(),
                    camera.direction(),
                    camera.focal_distance(),
                    camera.zoom_factor()
                );
            }
            if let Some(overlay) = compositor.latest_overlay() {
                log::info!("overlay {}x{}:\n{}", overlay.width, overlay.height, overlay.text);
            }
        }
    }

    compositor.shutdown();
    log::info!("finished {FRAMES} frames at {:.1} fps", clock.fps());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
