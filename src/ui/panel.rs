//! Overlay panels
//!
//! Presentation-only panels for the viewer. Panels receive the camera by
//! shared reference - the overlay displays camera state but can never
//! mutate it; all camera mutation goes through the input controller.

use crate::camera::FreeCamera;

/// Heads-up readout of the camera pose and frame rate.
pub fn camera_hud(ui: &imgui::Ui, camera: &FreeCamera, fps: f32) {
    ui.window("Camera")
        .size([260.0, 150.0], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .collapsible(true)
        .build(|| {
            let position = camera.position;
            ui.text(format!(
                "position  {:7.2} {:7.2} {:7.2}",
                position.x, position.y, position.z
            ));
            ui.text(format!("yaw       {:7.2} deg", camera.yaw()));
            ui.text(format!("pitch     {:7.2} deg", camera.pitch()));
            ui.text(format!("fov       {:7.2} deg", camera.zoom()));
            ui.separator();
            ui.text(format!("{:5.1} fps", fps));
        });
}

/// Static help panel listing the viewer controls.
pub fn controls_panel(ui: &imgui::Ui) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("Controls")
        .size([260.0, 130.0], imgui::Condition::FirstUseEver)
        .position(
            [20.0, display_size[1] - 150.0],
            imgui::Condition::FirstUseEver,
        )
        .collapsible(true)
        .build(|| {
            ui.text("WASD / arrows  move");
            ui.text("right drag     look");
            ui.text("scroll         zoom");
            ui.text("esc            quit");
        });
}
