//! Campuswalk - Headless Walkthrough Demo
//!
//! Builds a small synthetic campus scene, classifies its meshes into the
//! collision world and drives a scripted first-person walk through it at a
//! fixed timestep. Stands in for the real per-frame render callback: each
//! frame ticks the session, writes the resolved eye to the camera, applies
//! the shake for the "render", and removes it again before the next tick.

use glam::{Vec2, Vec3};

use campuswalk_game::{
    build_collision_world, box_positions, InputState, MaterialInfo, Region, RegionTable,
    SceneMesh, WalkSession,
};
use campuswalk_physics::MovementConfig;
use campuswalk_viewer::{CameraShake, ProximityOverlay, WalkCamera};

/// One scripted input segment: re-applied every frame with the frame
/// index inside the segment, so a setter can pulse a key.
struct Segment {
    ticks: u32,
    describe: &'static str,
    set: fn(&mut InputState, u32),
}

const SEGMENTS: &[Segment] = &[
    Segment {
        ticks: 180,
        describe: "walk north across the quad",
        set: |input, _| input.set_forward(true),
    },
    Segment {
        ticks: 120,
        describe: "run along the library wall",
        set: |input, _| {
            input.set_forward(true);
            input.set_run(true);
        },
    },
    Segment {
        ticks: 180,
        describe: "chained running jumps",
        set: |input, tick| {
            input.set_forward(true);
            input.set_run(true);
            // Tap jump twice a second; the resolver edge-detects.
            input.set_jump(tick % 30 < 10);
        },
    },
    Segment {
        ticks: 90,
        describe: "strafe east",
        set: |input, _| input.set_right(true),
    },
    Segment {
        ticks: 120,
        describe: "stand still and settle",
        set: |_, _| {},
    },
];

fn build_campus() -> Vec<SceneMesh> {
    let mut meshes = Vec::new();

    // Ground slab, keyword tier ("floor").
    let mut ground = SceneMesh::new("Campus_Floor", box_positions(Vec3::new(120.0, 0.5, 120.0)));
    ground.translation = Vec3::new(0.0, -0.5, 0.0);
    meshes.push(ground);

    // Two buildings flanking the walk, keyword tier.
    let mut library = SceneMesh::new("Library_Building", box_positions(Vec3::new(8.0, 6.0, 20.0)));
    library.translation = Vec3::new(-12.0, 6.0, -20.0);
    meshes.push(library);

    let mut hall = SceneMesh::new("Lecture_Hall_Wall", box_positions(Vec3::new(8.0, 6.0, 20.0)));
    hall.translation = Vec3::new(12.0, 6.0, -20.0);
    meshes.push(hall);

    // Invisible fence across the far end, marker tier.
    let mut fence = SceneMesh::new(
        "boundary_COLLIDER_north",
        box_positions(Vec3::new(40.0, 4.0, 0.5)),
    );
    fence.translation = Vec3::new(0.0, 4.0, -60.0);
    meshes.push(fence);

    // A bench beside the path, auto-detect tier.
    let mut bench = SceneMesh::new("Bench_Oak_02", box_positions(Vec3::new(1.2, 0.45, 0.5)));
    bench.translation = Vec3::new(3.0, 0.45, -12.0);
    meshes.push(bench);

    // A glass pane the player can walk through: translucent, auto-detect
    // tier excludes it.
    let mut pane = SceneMesh::new("Pane_Entrance", box_positions(Vec3::new(2.0, 3.0, 0.05)));
    pane.translation = Vec3::new(0.0, 3.0, -30.0);
    pane.material = Some(MaterialInfo {
        transparent: true,
        opacity: 0.25,
    });
    meshes.push(pane);

    meshes
}

fn region_table() -> RegionTable {
    RegionTable::new(vec![
        Region::new("The Quad", Vec2::new(-10.0, -18.0), Vec2::new(10.0, 0.0)),
        Region::new("Library Lawn", Vec2::new(-10.0, -45.0), Vec2::new(10.0, -18.0)),
        Region::new(
            "North Boundary",
            Vec2::new(-40.0, -60.0),
            Vec2::new(40.0, -45.0),
        ),
    ])
}

fn main() {
    env_logger::init();

    let mut meshes = build_campus();
    let (world, report) = build_collision_world(&mut meshes);
    log::info!(
        "campus scene: {} meshes, {} colliders ({} hidden)",
        meshes.len(),
        report.built,
        report.hidden
    );

    let config = MovementConfig::campus();
    let spawn_eye = Vec3::new(0.0, config.ground_height + config.eye_height, 0.0);
    let debug_radius = config.debug_radius;
    let landing_trigger = config.landing_shake_speed;

    let mut session = WalkSession::new(config, world, region_table());
    session.show_colliders = true;
    session.log_collisions = true;
    session.enter_first_person(spawn_eye);

    let mut camera = WalkCamera::new(spawn_eye);
    let mut shake = CameraShake::new(landing_trigger);
    let mut overlay = ProximityOverlay::new(debug_radius);
    let mut input = InputState::new();

    let dt = 1.0 / 60.0;
    let mut frame = 0u64;

    for segment in SEGMENTS {
        log::info!("segment: {}", segment.describe);

        for tick in 0..segment.ticks {
            input.release_all();
            (segment.set)(&mut input, tick);
            let snapshot = input.snapshot();
            let out = session.tick(&snapshot, camera.look_direction(), dt);

            // Physics writes the camera; feedback only reads.
            camera.set_eye(out.eye);

            if let Some(speed) = out.landing_speed {
                shake.trigger_landing(speed);
            }
            shake.advance(dt, snapshot.any_direction(), snapshot.run);

            if session.show_colliders {
                let delta = overlay.update(out.eye, session.world());
                if !delta.is_empty() {
                    log::debug!(
                        "overlay delta: show {:?} hide {:?}",
                        delta.show,
                        delta.hide
                    );
                }
            }

            if let Some(change) = out.region_change {
                log::info!("area prompt: {:?} -> {:?}", change.from, change.to);
            }

            // "Render" with the shake applied, then restore the camera so
            // the next tick starts from the authoritative position.
            shake.with_applied(&mut camera, |cam| {
                if frame % 60 == 0 {
                    log::debug!("frame {frame}: render eye {:?}", cam.eye);
                }
            });

            frame += 1;
        }
    }

    log::info!(
        "walk finished after {frame} frames at {:?}, {} colliders visible",
        session.eye(),
        overlay.visible_ids().len()
    );
    println!(
        "campuswalk demo: {frame} frames, final position {:?}",
        session.eye()
    );
}
