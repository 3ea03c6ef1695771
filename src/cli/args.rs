use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

pub use crate::domain::config::OutputFormat;
use crate::domain::resources::ProductType;

/// Command line arguments for Cloudbit
#[derive(Parser, Debug)]
#[command(
    name = "cloudbit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Command line interface for the Cloudbit cloud platform",
    long_about = "cloudbit is a command-line interface for managing locations, products, compute servers, networks, kubernetes clusters and mac bare metal devices."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Column separator for table and csv output
    #[arg(long, global = true)]
    pub separator: Option<String>,

    /// Align columns to their widest cell
    #[arg(long, global = true, overrides_with = "no_pretty")]
    pub pretty: bool,

    /// Do not align columns
    #[arg(long, global = true)]
    pub no_pretty: bool,

    /// Catalog snapshot to read resources from
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Alignment requested on the command line, if any
    pub fn pretty_override(&self) -> Option<bool> {
        match (self.pretty, self.no_pretty) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage datacenter locations
    #[command(alias = "locations")]
    Location(LocationArgs),
    /// Browse available products
    #[command(alias = "products")]
    Product(ProductArgs),
    /// Manage compute resources
    Compute(ComputeArgs),
    /// Manage kubernetes resources
    #[command(alias = "k8s")]
    Kubernetes(KubernetesArgs),
    /// Manage mac bare metal resources
    #[command(name = "mac-bare-metal", alias = "macbaremetal")]
    MacBareMetal(MacBareMetalArgs),
    /// Print a raw catalog collection as a table
    Raw {
        /// Collection name, e.g. servers
        collection: Option<String>,
    },
    /// Configuration management commands
    Config(ConfigArgs),
    /// Display version information
    Version,
}

/// Location arguments
#[derive(ClapArgs, Debug)]
pub struct LocationArgs {
    #[command(subcommand)]
    pub command: LocationCommand,
}

/// Location subcommands
#[derive(Subcommand, Debug)]
pub enum LocationCommand {
    /// List datacenter locations
    #[command(visible_aliases = ["ls", "show", "get"])]
    List {
        /// Custom term to filter the results
        #[arg(long)]
        filter: Option<String>,
    },
}

/// Product arguments
#[derive(ClapArgs, Debug)]
pub struct ProductArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

/// Product subcommands
#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// List products
    #[command(visible_aliases = ["ls", "show", "get"])]
    List {
        /// Custom term to filter the results
        #[arg(long)]
        filter: Option<String>,
        /// Only list products of this type
        #[arg(short, long, value_enum)]
        r#type: Option<ProductType>,
    },
}

/// Compute arguments
#[derive(ClapArgs, Debug)]
pub struct ComputeArgs {
    #[command(subcommand)]
    pub command: ComputeCommand,
}

/// Compute subcommands
#[derive(Subcommand, Debug)]
pub enum ComputeCommand {
    /// Manage compute servers
    #[command(alias = "servers")]
    Server {
        #[command(subcommand)]
        command: ResourceCommand,
    },
    /// Manage networks
    #[command(alias = "networks")]
    Network {
        #[command(subcommand)]
        command: NetworkCommand,
    },
}

/// Kubernetes arguments
#[derive(ClapArgs, Debug)]
pub struct KubernetesArgs {
    #[command(subcommand)]
    pub command: KubernetesCommand,
}

/// Kubernetes subcommands
#[derive(Subcommand, Debug)]
pub enum KubernetesCommand {
    /// Manage kubernetes clusters
    #[command(alias = "clusters")]
    Cluster {
        #[command(subcommand)]
        command: ClusterCommand,
    },
}

/// Mac bare metal arguments
#[derive(ClapArgs, Debug)]
pub struct MacBareMetalArgs {
    #[command(subcommand)]
    pub command: MacBareMetalCommand,
}

/// Mac bare metal subcommands
#[derive(Subcommand, Debug)]
pub enum MacBareMetalCommand {
    /// Manage mac bare metal devices
    #[command(alias = "devices")]
    Device {
        #[command(subcommand)]
        command: DeviceCommand,
    },
}

/// Kubernetes cluster subcommands
#[derive(Subcommand, Debug)]
pub enum ClusterCommand {
    /// Create a new kubernetes cluster
    Create(ClusterCreateArgs),
    #[command(flatten)]
    Resource(ResourceCommand),
}

/// Arguments of `kubernetes cluster create`
#[derive(ClapArgs, Debug)]
pub struct ClusterCreateArgs {
    /// Name of the cluster
    #[arg(short, long)]
    pub name: String,
    /// Location of the cluster
    #[arg(short, long)]
    pub location: String,
    /// Network in which the cluster will be created
    #[arg(long)]
    pub network: Option<String>,
    /// Product for the worker nodes
    #[arg(long)]
    pub worker_product: String,
    /// Number of worker nodes
    #[arg(long, default_value_t = 3)]
    pub worker_count: u32,
}

/// Mac bare metal device subcommands
#[derive(Subcommand, Debug)]
pub enum DeviceCommand {
    /// Create a new mac bare metal device
    Create(DeviceCreateArgs),
    #[command(flatten)]
    Resource(ResourceCommand),
}

/// Arguments of `mac-bare-metal device create`
#[derive(ClapArgs, Debug)]
pub struct DeviceCreateArgs {
    /// Name of the device
    #[arg(short, long)]
    pub name: String,
    /// Location of the device
    #[arg(short, long)]
    pub location: String,
    /// Product for the device
    #[arg(long)]
    pub product: String,
    /// Network to attach the device to
    #[arg(long)]
    pub network: String,
}

/// Subcommands shared by renamable resources
#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    /// List resources
    #[command(visible_aliases = ["ls", "show", "get"])]
    List {
        /// Custom term to filter the results
        #[arg(long)]
        filter: Option<String>,
    },
    /// Update a resource
    Update {
        /// Id or name of the resource
        term: String,
        /// New name of the resource
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Delete a resource
    #[command(visible_alias = "rm")]
    Delete {
        /// Id or name of the resource
        term: String,
        /// Delete without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Network subcommands
#[derive(Subcommand, Debug)]
pub enum NetworkCommand {
    /// List networks
    #[command(visible_aliases = ["ls", "show", "get"])]
    List {
        /// Custom term to filter the results
        #[arg(long)]
        filter: Option<String>,
    },
    /// Update a network
    Update {
        /// Id, name or cidr of the network
        term: String,
        /// New name of the network
        #[arg(short, long)]
        name: Option<String>,
        /// New description of the network
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a network
    #[command(visible_alias = "rm")]
    Delete {
        /// Id, name or cidr of the network
        term: String,
        /// Delete without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Configuration management arguments
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration
    Validate {
        /// Configuration file path
        file: Option<PathBuf>,
    },
    /// Create default configuration
    Init {
        /// Directory to create the project configuration in
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Write the global configuration instead
        #[arg(short, long)]
        global: bool,
    },
}
