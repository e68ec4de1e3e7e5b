/// Ringcube Terminal Demo - Rotating Wireframe Cube
///
/// Renders the fixed demo scene (one subdivided wireframe cube) in the
/// terminal, rotating 0.01 radians per frame on x and y.
/// Press Q or ESC to quit.

use ringcube_core::content;
use ringcube_terminal::TerminalApp;
use std::io;

fn main() -> io::Result<()> {
    env_logger::init();

    let scene = content::build_scene();
    log::info!(
        "demo scene built: {} triangles",
        scene.meshes()[0].geometry().triangles.len()
    );

    let mut app = TerminalApp::new(scene)?;
    app.run()
}
