//! Viewer binary
//!
//! Opens a window with a demo scene (ground plane plus scattered cubes, or
//! an OBJ model passed as the first argument) and the camera HUD overlay.

use anyhow::Result;
use rand::Rng;

use freelook::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut app = freelook::default();
    populate_scene(app.scene_mut())?;

    app.set_ui(|ui, scene, fps| {
        camera_hud(ui, &scene.camera_manager.camera, fps);
        controls_panel(ui);
    });

    app.run();
    Ok(())
}

fn populate_scene(scene: &mut Scene) -> Result<()> {
    scene
        .add_geometry("ground", &generate_plane(24.0, 24.0, 8))
        .with_color([0.35, 0.38, 0.35, 1.0]);

    if let Some(path) = std::env::args().nth(1) {
        scene.add_object(&path)?;
        return Ok(());
    }

    let mut rng = rand::rng();
    let cube = generate_cube();
    for i in 0..24 {
        let scale: f32 = rng.random_range(0.3..1.4);
        let x: f32 = rng.random_range(-10.0..10.0);
        let z: f32 = rng.random_range(-10.0..10.0);
        scene
            .add_geometry(&format!("cube_{i}"), &cube)
            .with_color([
                rng.random_range(0.2..0.9),
                rng.random_range(0.2..0.9),
                rng.random_range(0.2..0.9),
                1.0,
            ])
            .with_transform(
                Vector3::new(x, scale * 0.5, z),
                Deg(rng.random_range(0.0..360.0)),
                scale,
            );
    }

    log::info!("demo scene: {} objects", scene.objects.len());
    Ok(())
}
