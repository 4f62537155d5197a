//! Demo driver for the boxview engine.
//!
//! Simulates a host: posts a payload naming an image, fulfills load
//! requests from the filesystem, and walks through a few gestures,
//! printing the render snapshot after each step.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use boxview::source::FsImageSource;
    use boxview::{Message, PointerMessage, RenderSnapshot, ToolbarMessage, ViewerApp};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let image_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "img.jpg".to_string());

    let source = FsImageSource::new();
    let mut app = ViewerApp::new();
    app.update(Message::ContainerResized(800.0, 600.0));

    // Host posts the payload naming the image
    let payload = serde_json::json!({ "data": [[image_name]] });
    if let Some(request) = app.update(Message::HostData(payload)) {
        let completion = source.resolve(&request);
        app.update(Message::Load(completion));
    }
    print_snapshot("after load", &app.snapshot());

    // A few gestures
    app.update(Message::Toolbar(ToolbarMessage::ZoomIn));
    app.update(Message::Toolbar(ToolbarMessage::ZoomIn));
    app.update(Message::Toolbar(ToolbarMessage::ToggleMode));
    app.update(Message::Pointer(PointerMessage::Down(400.0, 300.0)));
    app.update(Message::Pointer(PointerMessage::Moved(430.0, 280.0)));
    app.update(Message::Pointer(PointerMessage::Up));
    app.update(Message::Toolbar(ToolbarMessage::Maximize));
    print_snapshot("after gestures", &app.snapshot());

    fn print_snapshot(label: &str, snapshot: &RenderSnapshot) {
        println!("--- {} ---", label);
        match &snapshot.error {
            Some(error) => {
                println!("error: {}", error.message);
                if !error.details.is_empty() {
                    println!("       {}", error.details);
                }
            }
            None => {
                println!(
                    "image: visible={} transform=\"{}\"",
                    snapshot.image_visible, snapshot.image_transform.transform
                );
                println!(
                    "overlay: {}x{} ({} commands)",
                    snapshot.overlay.width,
                    snapshot.overlay.height,
                    snapshot.overlay.commands.len()
                );
            }
        }
        println!(
            "toolbar: enabled={} slider={} mode={}",
            snapshot.toolbar.enabled, snapshot.toolbar.slider_percent, snapshot.toolbar.mode_icon
        );
    }
}

// The engine is platform-neutral, but the demo driver needs a
// filesystem.
#[cfg(target_arch = "wasm32")]
fn main() {}
