/// Hostname that marks the node running the master application.
pub const LOCAL_HOSTNAME: &str = "local";

/// Initial canvas rectangle passed to every launched node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CanvasRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A single window on a render node.
#[derive(Clone, Debug, PartialEq)]
pub struct TileConfig {
    pub name: String,
    /// Window position relative to the display's window offset
    pub position: [i32; 2],
    pub pixel_size: [i32; 2],
    /// GPU index; consecutive tiles on the same device share a pipe
    pub device: i32,
    pub borderless: bool,
    pub offscreen: bool,
}

impl TileConfig {
    pub fn new(name: &str, position: [i32; 2], pixel_size: [i32; 2], device: i32) -> Self {
        Self {
            name: name.to_string(),
            position,
            pixel_size,
            device,
            borderless: false,
            offscreen: false,
        }
    }
}

/// A render node and the tiles it drives.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeConfig {
    pub hostname: String,
    /// Offset added to the display's base port
    pub port: u16,
    /// False when every tile on the node is disabled
    pub enabled: bool,
    pub tiles: Vec<TileConfig>,
}

impl NodeConfig {
    pub fn new(hostname: &str, port: u16, tiles: Vec<TileConfig>) -> Self {
        Self {
            hostname: hostname.to_string(),
            port,
            enabled: true,
            tiles,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.hostname != LOCAL_HOSTNAME
    }
}

/// Contains the cluster display layout and launch settings
#[derive(Clone, Debug)]
pub struct DisplayConfig {
    pub base_port: u16,
    /// Frames the rendering framework may run ahead. Values above zero let
    /// several shared data messages reach slaves before their local objects
    /// exist.
    pub latency: u32,
    pub window_offset: [i32; 2],
    pub fullscreen: bool,
    pub enable_swap_sync: bool,
    /// Skip writing the generated configuration file
    pub disable_config_generator: bool,
    pub nodes: Vec<NodeConfig>,
    /// Command template for starting a remote node (`%c`, `%h`, `%d`)
    pub node_launcher: String,
    /// Command template for killing a remote node (`%c`, `%h`); empty disables it
    pub node_killer: String,
    /// Milliseconds to wait after launching remote nodes
    pub launcher_interval: u64,
    pub canvas: CanvasRect,
}

impl DisplayConfig {
    pub fn enabled_nodes(&self) -> impl Iterator<Item = &NodeConfig> {
        self.nodes.iter().filter(|node| node.enabled)
    }

    /// Port a remote node listens on.
    pub fn node_port(&self, node: &NodeConfig) -> u32 {
        u32::from(self.base_port) + u32::from(node.port)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            base_port: 24000,
            latency: 0,
            window_offset: [0, 0],
            fullscreen: false,
            enable_swap_sync: true,
            disable_config_generator: false,
            nodes: Vec::new(),
            node_launcher: "ssh -n %h cd %d; %c".to_string(),
            node_killer: String::new(),
            launcher_interval: 5000,
            canvas: CanvasRect::default(),
        }
    }
}
