use std::{path::Path, process::Command, thread, time::Duration};

use log::{debug, info};

use framesync_shared::NodeRole;

use crate::{ClusterError, DisplayConfig};

/// A process to start: what to run, with which arguments, from where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessSpec {
    pub executable: String,
    pub args: Vec<String>,
    pub working_dir: Option<String>,
}

impl ProcessSpec {
    pub fn new(executable: &str) -> Self {
        Self {
            executable: executable.to_string(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Starts processes described by a `ProcessSpec`.
pub trait ProcessLauncher {
    fn launch(&mut self, spec: &ProcessSpec) -> Result<(), ClusterError>;
}

/// Launches through the operating system without waiting for the child.
#[derive(Default)]
pub struct CommandLauncher;

impl ProcessLauncher for CommandLauncher {
    fn launch(&mut self, spec: &ProcessSpec) -> Result<(), ClusterError> {
        let mut command = Command::new(&spec.executable);
        command.args(&spec.args);
        if let Some(dir) = &spec.working_dir {
            command.current_dir(dir);
        }
        debug!("launching {} {:?}", spec.executable, spec.args);
        command
            .spawn()
            .map(|_| ())
            .map_err(|source| ClusterError::LaunchFailed {
                executable: spec.executable.clone(),
                source,
            })
    }
}

/// A command template with `%c` (executable), `%h` (hostname) and `%d`
/// (working directory) placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeCommand {
    template: String,
}

impl NodeCommand {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.template.trim().is_empty()
    }

    /// Splits the template on whitespace, then substitutes placeholders inside
    /// each word. A substituted value never spans more than one argument.
    pub fn expand(
        &self,
        executable: &str,
        hostname: &str,
        working_dir: &str,
    ) -> Result<ProcessSpec, ClusterError> {
        let substitute = |word: &str| {
            word.replace("%c", executable)
                .replace("%h", hostname)
                .replace("%d", working_dir)
        };

        let mut words = self.template.split_whitespace().map(substitute);
        let Some(program) = words.next() else {
            return Err(ClusterError::EmptyCommand {
                template: self.template.clone(),
            });
        };

        let mut spec = ProcessSpec::new(&program);
        spec.args.extend(words);
        Ok(spec)
    }
}

/// Values shared by every node launch.
#[derive(Clone, Debug)]
pub struct LaunchContext {
    /// Full path of the application executable
    pub executable: String,
    /// Application configuration file passed with `-c`
    pub app_config: String,
    /// Root data directory passed with `-D`
    pub data_prefix: String,
    pub working_dir: String,
}

impl LaunchContext {
    /// Executable name without directory or extension, as seen by `killall`.
    pub fn process_name(&self) -> String {
        Path::new(&self.executable)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.executable.clone())
    }
}

/// One process per enabled remote node, each told which node it is and the
/// initial canvas.
pub fn launch_plan(
    config: &DisplayConfig,
    context: &LaunchContext,
) -> Result<Vec<ProcessSpec>, ClusterError> {
    let launcher = NodeCommand::new(&config.node_launcher);
    let canvas = &config.canvas;
    let initial_canvas = format!(
        "{},{},{},{}",
        canvas.x, canvas.y, canvas.width, canvas.height
    );

    let mut plan = Vec::new();
    for node in config.enabled_nodes().filter(|node| node.is_remote()) {
        let mut spec = launcher.expand(&context.executable, &node.hostname, &context.working_dir)?;
        spec.args.extend([
            "-c".to_string(),
            format!(
                "{}@{}:{}",
                context.app_config,
                node.hostname,
                config.node_port(node)
            ),
            "-D".to_string(),
            context.data_prefix.clone(),
            "-w".to_string(),
            initial_canvas.clone(),
        ]);
        plan.push(spec);
    }
    Ok(plan)
}

/// Kill commands for every enabled remote node, followed by the local
/// `killall` for the master's own process.
pub fn kill_plan(
    config: &DisplayConfig,
    context: &LaunchContext,
) -> Result<Vec<ProcessSpec>, ClusterError> {
    let process_name = context.process_name();
    let killer = NodeCommand::new(&config.node_killer);

    let mut plan = Vec::new();
    if !killer.is_empty() {
        for node in config.enabled_nodes().filter(|node| node.is_remote()) {
            plan.push(killer.expand(&process_name, &node.hostname, &context.working_dir)?);
        }
    }
    plan.push(ProcessSpec::new("killall").arg(process_name));
    Ok(plan)
}

/// Launches every remote node, then waits `launcher_interval` milliseconds so
/// they can start listening.
pub fn launch_cluster(
    config: &DisplayConfig,
    context: &LaunchContext,
    launcher: &mut dyn ProcessLauncher,
) -> Result<usize, ClusterError> {
    let plan = launch_plan(config, context)?;
    for spec in &plan {
        launcher.launch(spec)?;
    }
    info!("Launched {} remote nodes", plan.len());
    if !plan.is_empty() && config.launcher_interval > 0 {
        thread::sleep(Duration::from_millis(config.launcher_interval));
    }
    Ok(plan.len())
}

/// Command-line arguments the rendering framework is initialized with.
pub fn node_args(role: NodeRole, app_name: &str, config_file: &str, listen: &str) -> Vec<String> {
    match role {
        NodeRole::Master => vec![
            app_name.to_string(),
            "--eq-config".to_string(),
            config_file.to_string(),
        ],
        NodeRole::Slave => vec![
            app_name.to_string(),
            "--eq-client".to_string(),
            "--eq-listen".to_string(),
            listen.to_string(),
        ],
    }
}
