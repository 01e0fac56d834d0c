use clip_core::ports::AppDirsPort;
use clip_platform::app_dirs::DirsAppDirsAdapter;
use ui_clip_lib::bootstrap::{self, tracing::init_tracing_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_dirs = match DirsAppDirsAdapter::new().get_app_dirs() {
        Ok(dirs) => Some(dirs),
        Err(err) => {
            eprintln!("App data directory unavailable: {err}");
            None
        }
    };

    init_tracing_subscriber(app_dirs.as_ref().map(|d| d.logs_dir()).as_deref())?;

    let config = bootstrap::load_gallery_config(app_dirs.as_ref())?;
    let gallery = bootstrap::build_gallery(config, app_dirs.as_ref())?;
    gallery.initialize().await;

    let view = gallery.view();
    tracing::info!(
        category = %view.selected_category,
        visible = view.visible_entries.len(),
        total = view.total_count,
        "gallery view rendered"
    );
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
