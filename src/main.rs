use std::path::PathBuf;

use clap::{ArgAction, Parser};

use sketchpad::config::Config;
use sketchpad::export;
use sketchpad::input::Tool;
use sketchpad::layout::{self, ChromeHeights, Viewport};
use sketchpad::notification;
use sketchpad::script::{self, ScriptEvent};
use sketchpad::session::Session;
use sketchpad::util;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Headless freehand sketch pad with undo history and PNG export")]
struct Cli {
    /// Replay a JSON event script onto a fresh canvas
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Output directory for exported drawings (overrides config)
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Canvas size as WIDTHxHEIGHT (defaults to the responsive layout rules)
    #[arg(long, short = 's', value_name = "WxH")]
    size: Option<String>,

    /// Send a desktop notification when a drawing is exported
    #[arg(long, action = ArgAction::SetTrue)]
    notify: bool,

    /// Write the default configuration to ~/.config/sketchpad/config.toml
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let config = Config::default();
        config.save()?;
        println!(
            "Wrote default configuration to {}",
            Config::get_config_path()?.display()
        );
        return Ok(());
    }

    if let Some(script_path) = cli.replay {
        let mut config = Config::load()?;
        if let Some(dir) = cli.output {
            config.export.directory = dir.to_string_lossy().into_owned();
        }

        let runtime = tokio::runtime::Runtime::new()?;
        let saved = runtime.block_on(replay(&script_path, &config, cli.size.as_deref()))?;

        if cli.notify {
            // Block until delivery: the runtime is dropped on return, which
            // would cancel a detached notification task mid-flight.
            let result = runtime.block_on(notification::send_notification(
                "Drawing saved",
                &format!("Saved to {}", saved.display()),
                None,
            ));
            if let Err(e) = result {
                log::warn!("Failed to send notification: {}", e);
            }
        }
        return Ok(());
    }

    // No flags: show usage
    println!("sketchpad: Headless freehand sketch pad");
    println!();
    println!("Usage:");
    println!("  sketchpad --replay <FILE>   Replay a JSON event script and export the result");
    println!("  sketchpad --init-config     Write the default configuration file");
    println!("  sketchpad --help            Show help");
    println!();
    println!("Config: ~/.config/sketchpad/config.toml");

    Ok(())
}

/// Replays a script onto a fresh canvas and exports the final drawing.
async fn replay(
    script_path: &std::path::Path,
    config: &Config,
    size: Option<&str>,
) -> anyhow::Result<PathBuf> {
    let events = script::load_script(script_path)?;
    log::info!(
        "Replaying {} events from {}",
        events.len(),
        script_path.display()
    );

    let (width, height) = match size {
        Some(spec) => parse_size(spec)?,
        None => layout::canvas_size(
            Viewport {
                width: config.canvas.viewport_width,
                height: config.canvas.viewport_height,
            },
            config.canvas.viewport_width,
            ChromeHeights {
                header: config.canvas.header_height,
                toolbar: config.canvas.toolbar_height,
                footer: config.canvas.footer_height,
            },
        ),
    };

    let action_map = config
        .keybindings
        .build_action_map()
        .map_err(|e| anyhow::anyhow!("Invalid keybindings: {e}"))?;
    let mut session = Session::new(
        width,
        height,
        config.drawing.default_color.to_color(),
        config.drawing.default_brush_size,
        action_map,
    )?;

    for event in events {
        apply_event(&mut session, event).await?;

        // Keyboard shortcuts raise flags for actions that need IO or
        // confirmation; in a replay both are serviced immediately.
        if session.take_clear_request() {
            session.clear()?;
        }
        if session.take_export_request() {
            export_drawing(&mut session, config)?;
        }
    }

    // Always export the final state so a script without an explicit
    // Ctrl+S still produces a file.
    export_drawing(&mut session, config)
}

async fn apply_event(session: &mut Session, event: ScriptEvent) -> anyhow::Result<()> {
    match event {
        ScriptEvent::Input { event } => session.handle_event(event).await?,
        ScriptEvent::SetColor { color } => match util::resolve_color(&color) {
            Some(color) => session.set_color(color),
            None => log::warn!("Ignoring unknown color '{color}'"),
        },
        ScriptEvent::SetBrushSize { size } => session.set_brush_size(size),
        ScriptEvent::SelectSwatch { index } => {
            if !session.select_swatch(index) {
                log::warn!("Ignoring out-of-range swatch index {index}");
            }
        }
        ScriptEvent::SetTool { tool } => match tool {
            Tool::Pen => session.activate_pen(),
            Tool::Eraser => session.activate_eraser(),
        },
        ScriptEvent::Clear => session.clear()?,
        ScriptEvent::Resize { width, height } => session.resize(width, height)?,
    }
    Ok(())
}

fn export_drawing(session: &mut Session, config: &Config) -> anyhow::Result<PathBuf> {
    let image_data = export::render_export(session.canvas(), &config.export.watermark)?;
    let path = export::save_drawing(&image_data, &config.export)?;
    session.post_notice("Drawing saved successfully!");
    log::info!("Drawing saved to {}", path.display());
    Ok(path)
}

fn parse_size(spec: &str) -> anyhow::Result<(i32, i32)> {
    let parsed = spec
        .split_once('x')
        .and_then(|(w, h)| Some((w.trim().parse().ok()?, h.trim().parse().ok()?)));
    match parsed {
        Some((w, h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(anyhow::anyhow!(
            "Invalid size '{spec}': expected WIDTHxHEIGHT, e.g. 800x600"
        )),
    }
}
