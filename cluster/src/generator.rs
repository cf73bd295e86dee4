use std::{fs, path::Path};

use log::{info, warn};

use crate::{ClusterError, ConfigBlock, ConfigDocument, DisplayConfig, NodeConfig, TileConfig};

pub const CONFIG_HEADER: &str = "#Equalizer 1.0 ascii";

/// Builds the cluster display configuration for every enabled node.
///
/// `display_port` is the X display number pipes are opened on, see
/// `parse_display_port`.
pub fn generate(config: &DisplayConfig, display_port: i32) -> Result<ConfigDocument, ClusterError> {
    if config.enabled_nodes().next().is_none() {
        return Err(ClusterError::NoEnabledNodes);
    }

    let global = ConfigBlock::new("global")
        .line("EQ_CONFIG_FATTR_EYE_BASE 0.06")
        .line("EQ_WINDOW_IATTR_PLANES_STENCIL ON");

    let mut cluster = ConfigBlock::new("config").line(format!("latency {}", config.latency));
    for node in config.enabled_nodes() {
        cluster.push_block(node_block(config, node, display_port));
    }
    cluster.push_block(compound_block(config));

    let server = ConfigBlock::new("server")
        .block(
            ConfigBlock::new("connection")
                .line("type TCPIP")
                .line(format!("port {}", config.base_port)),
        )
        .block(cluster);

    Ok(ConfigDocument {
        header: vec![CONFIG_HEADER.to_string()],
        blocks: vec![global, server],
    })
}

fn node_block(config: &DisplayConfig, node: &NodeConfig, display_port: i32) -> ConfigBlock {
    let mut block = if node.is_remote() {
        ConfigBlock::new("node")
            .block(
                ConfigBlock::new("connection")
                    .line("type TCPIP")
                    .line(format!("hostname \"{}\"", node.hostname))
                    .line(format!("port {}", config.node_port(node))),
            )
            .block(ConfigBlock::new("attributes").line("thread_model DRAW_SYNC"))
    } else {
        ConfigBlock::new("appNode").line("attributes { thread_model DRAW_SYNC }")
    };

    // consecutive tiles on one device share a pipe
    let mut pipe: Option<(i32, ConfigBlock)> = None;
    for tile in &node.tiles {
        match pipe.as_mut() {
            Some((device, current)) if *device == tile.device => {
                current.push_block(window_block(config, tile));
            }
            _ => {
                if let Some((_, finished)) = pipe.take() {
                    block.push_block(finished);
                }
                let new_pipe = pipe_block(tile, display_port).block(window_block(config, tile));
                pipe = Some((tile.device, new_pipe));
            }
        }
    }
    if let Some((_, finished)) = pipe {
        block.push_block(finished);
    }

    block
}

fn pipe_block(tile: &TileConfig, display_port: i32) -> ConfigBlock {
    ConfigBlock::new("pipe")
        .line(format!("name = \"{}-{}\"", tile.name, tile.device))
        .line(format!("port = {}", display_port))
        .line(format!("device = {}", tile.device))
}

fn window_block(config: &DisplayConfig, tile: &TileConfig) -> ConfigBlock {
    let x = tile.position[0] + config.window_offset[0];
    let y = tile.position[1] + config.window_offset[1];

    let mut window = ConfigBlock::new("window")
        .line(format!("name \"{}\"", tile.name))
        .line(format!(
            "viewport [{} {} {} {}]",
            x, y, tile.pixel_size[0], tile.pixel_size[1]
        ))
        .line(format!("channel {{ name \"{}\"}}", tile.name));

    if config.fullscreen {
        window.push_block(
            ConfigBlock::new("attributes")
                .line("hint_fullscreen ON")
                .line("hint_decoration OFF"),
        );
    } else if tile.borderless {
        window.push_block(ConfigBlock::new("attributes").line("hint_decoration OFF"));
    } else if tile.offscreen {
        window.push_block(ConfigBlock::new("attributes").line("hint_drawable FBO"));
    }

    window
}

fn wall_block() -> ConfigBlock {
    ConfigBlock::new("wall")
        .line("bottom_left [ -1 -0.5 0 ]")
        .line("bottom_right [ 1 -0.5 0 ]")
        .line("top_left [ -1 0.5 0 ]")
}

fn compound_block(config: &DisplayConfig) -> ConfigBlock {
    let mut tiles: Vec<&TileConfig> = config
        .enabled_nodes()
        .flat_map(|node| node.tiles.iter())
        .collect();
    tiles.sort_by(|a, b| a.name.cmp(&b.name));

    let mut compound = ConfigBlock::new("compound");
    for tile in tiles {
        let channel = format!("channel \"{}\"", tile.name);
        if config.enable_swap_sync {
            compound.push_block(
                ConfigBlock::new("compound")
                    .line("swapbarrier { name \"defaultbarrier\" }")
                    .line(channel)
                    .line("task [DRAW]")
                    .block(wall_block()),
            );
        } else {
            compound.push_line(channel);
            compound.push_line("task [DRAW]");
            compound.push_block(wall_block());
        }
    }
    compound
}

/// Extracts the display number from a `DISPLAY` value like `host:X.Y`.
///
/// Malformed values log a warning and yield 0.
pub fn parse_display_port(display: &str) -> i32 {
    let after_host = match display.split_once(':') {
        Some((_, rest)) => rest,
        None => display,
    };
    let number = after_host.split('.').next().unwrap_or_default();
    match number.parse::<i32>() {
        Ok(port) => port,
        Err(_) => {
            warn!("DISPLAY env wrong format {}", display);
            0
        }
    }
}

/// Display number from the `DISPLAY` environment variable, 0 if unset.
pub fn display_port_from_env() -> i32 {
    match std::env::var("DISPLAY") {
        Ok(display) => parse_display_port(&display),
        Err(_) => 0,
    }
}

/// Writes the rendered configuration unless generation is disabled.
///
/// On unix the file is made writable by everyone so any user can regenerate it.
pub fn write_config_file(
    config: &DisplayConfig,
    path: &Path,
    text: &str,
) -> Result<bool, ClusterError> {
    if config.disable_config_generator {
        info!("Config generator disabled, keeping {}", path.display());
        return Ok(false);
    }

    let to_error = |source: std::io::Error| ClusterError::ConfigWrite {
        path: path.display().to_string(),
        source,
    };

    fs::write(path, text).map_err(to_error)?;
    make_world_writable(path).map_err(to_error)?;

    info!("Wrote cluster configuration to {}", path.display());
    Ok(true)
}

cfg_if! {
    if #[cfg(unix)] {
        fn make_world_writable(path: &Path) -> std::io::Result<()> {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o777))
        }
    } else {
        fn make_world_writable(_path: &Path) -> std::io::Result<()> {
            Ok(())
        }
    }
}
