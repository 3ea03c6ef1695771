use crate::cli::args::{
    Args, ClusterCommand, ClusterCreateArgs, Command, ComputeCommand, ConfigCommand, DeviceCommand,
    DeviceCreateArgs, KubernetesCommand, LocationCommand, MacBareMetalCommand, NetworkCommand,
    ProductCommand, ResourceCommand,
};
use crate::cli::console::Console;
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::catalog::Catalog;
use crate::core::filter::{self, FilterError, Filterable};
use crate::core::table::Displayable;
use crate::domain::config::CloudConfig;
use crate::domain::error::CloudError;
use crate::domain::resources::{
    Cluster, ClusterCreate, ClusterUpdate, Device, DeviceCreate, DeviceUpdate, Location, Mutable,
    Network, NetworkUpdate, Product, ProductType, Reference, Resource, Server, ServerUpdate,
};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging;
use crate::infrastructure::snapshot::SnapshotCatalog;
use anyhow::{Context, Result};
use std::io;
use tracing::{debug, info};

/// Execute CLI command
pub async fn execute_command(args: Args) -> Result<()> {
    // Load configuration using ConfigManager
    let config_manager = ConfigManager::new()?;
    let mut config = match &args.config {
        Some(config_path) => config_manager.load_config_from_path(config_path)?,
        None => config_manager.load_config()?,
    };
    apply_overrides(&mut config, &args);

    // Initialize logging
    if !args.quiet {
        logging::init_logging(&config.global.log_level, args.verbose)?;
    }

    let mut writer = ConsoleWriter::new(config.output.format, config.output.render_options());
    let mut console = Console::stderr(config.output.color);

    match args.command {
        Command::Config(config_args) => {
            execute_config_command(config_args.command, &mut writer, &config, &config_manager)
        }
        Command::Version => {
            writer.write_message(&format!("cloudbit {}", env!("CARGO_PKG_VERSION")))?;
            Ok(())
        }
        command => {
            let catalog = open_catalog(&config)?;
            execute_resource_command(command, &catalog, &mut writer, &mut console).await
        }
    }
}

/// Command line flags win over configuration files
fn apply_overrides(config: &mut CloudConfig, args: &Args) {
    if let Some(format) = args.output {
        config.output.format = format;
    }
    if let Some(separator) = &args.separator {
        config.output.separator = Some(separator.clone());
    }
    if let Some(pretty) = args.pretty_override() {
        config.output.pretty = Some(pretty);
    }
    if let Some(snapshot) = &args.snapshot {
        config.global.snapshot = Some(snapshot.clone());
    }
}

fn open_catalog(config: &CloudConfig) -> Result<SnapshotCatalog> {
    let path = config.global.snapshot.as_ref().ok_or_else(|| CloudError::Config {
        message: "no catalog snapshot configured, pass --snapshot or set global.snapshot".to_string(),
    })?;
    Ok(SnapshotCatalog::load(path)?)
}

/// Run every command that works on catalog resources
pub async fn execute_resource_command<C, W, E>(
    command: Command,
    catalog: &C,
    writer: &mut ConsoleWriter<W>,
    console: &mut Console<E>,
) -> Result<()>
where
    C: Catalog,
    W: io::Write,
    E: io::Write,
{
    match command {
        Command::Location(args) => match args.command {
            LocationCommand::List { filter } => list::<Location, _, _>(catalog, writer, filter).await,
        },
        Command::Product(args) => match args.command {
            ProductCommand::List { filter, r#type } => list_products(catalog, writer, filter, r#type).await,
        },
        Command::Compute(args) => match args.command {
            ComputeCommand::Server { command } => {
                resource_command::<Server, _, _, _, _>(command, catalog, writer, console, |name| {
                    ServerUpdate { name }
                })
                .await
            }
            ComputeCommand::Network { command } => match command {
                NetworkCommand::List { filter } => list::<Network, _, _>(catalog, writer, filter).await,
                NetworkCommand::Update { term, name, description } => {
                    update::<Network, _, _>(catalog, writer, &term, NetworkUpdate { name, description }).await
                }
                NetworkCommand::Delete { term, force } => {
                    delete::<Network, _, _, _>(catalog, writer, console, &term, force).await
                }
            },
        },
        Command::Kubernetes(args) => match args.command {
            KubernetesCommand::Cluster { command } => match command {
                ClusterCommand::Create(create) => create_cluster(catalog, writer, create).await,
                ClusterCommand::Resource(command) => {
                    resource_command::<Cluster, _, _, _, _>(command, catalog, writer, console, |name| {
                        ClusterUpdate { name }
                    })
                    .await
                }
            },
        },
        Command::MacBareMetal(args) => match args.command {
            MacBareMetalCommand::Device { command } => match command {
                DeviceCommand::Create(create) => create_device(catalog, writer, create).await,
                DeviceCommand::Resource(command) => {
                    resource_command::<Device, _, _, _, _>(command, catalog, writer, console, |name| {
                        DeviceUpdate { name }
                    })
                    .await
                }
            },
        },
        Command::Raw { collection } => raw(catalog, writer, collection).await,
        Command::Config(_) | Command::Version => {
            Err(CloudError::InvalidInput("not a resource command".to_string()).into())
        }
    }
}

async fn resource_command<T, C, W, E, F>(
    command: ResourceCommand,
    catalog: &C,
    writer: &mut ConsoleWriter<W>,
    console: &mut Console<E>,
    rename: F,
) -> Result<()>
where
    T: Mutable + Displayable + Filterable,
    C: Catalog,
    W: io::Write,
    E: io::Write,
    F: FnOnce(Option<String>) -> T::Update,
{
    match command {
        ResourceCommand::List { filter } => list::<T, _, _>(catalog, writer, filter).await,
        ResourceCommand::Update { term, name } => update::<T, _, _>(catalog, writer, &term, rename(name)).await,
        ResourceCommand::Delete { term, force } => delete::<T, _, _, _>(catalog, writer, console, &term, force).await,
    }
}

async fn list<T, C, W>(catalog: &C, writer: &mut ConsoleWriter<W>, filter: Option<String>) -> Result<()>
where
    T: Resource + Displayable + Filterable,
    C: Catalog,
    W: io::Write,
{
    let items: Vec<T> = catalog
        .list()
        .await
        .with_context(|| format!("fetch {}", T::COLLECTION))?;

    match filter.as_deref().filter(|term| !term.is_empty()) {
        Some(term) => writer.write_records(&filter::find(&items, term))?,
        None => writer.write_records(&items)?,
    }
    Ok(())
}

async fn list_products<C, W>(
    catalog: &C,
    writer: &mut ConsoleWriter<W>,
    filter: Option<String>,
    product_type: Option<ProductType>,
) -> Result<()>
where
    C: Catalog,
    W: io::Write,
{
    let mut products: Vec<Product> = catalog.list().await.context("fetch products")?;
    if let Some(product_type) = product_type {
        products.retain(|product| product.product_type == product_type);
    }

    match filter.as_deref().filter(|term| !term.is_empty()) {
        Some(term) => writer.write_records(&filter::find(&products, term))?,
        None => writer.write_records(&products)?,
    }
    Ok(())
}

/// Resolve `term` to exactly one resource of type `T`
pub async fn resolve<T, C>(catalog: &C, term: &str) -> Result<T>
where
    T: Resource + Filterable,
    C: Catalog,
{
    let items: Vec<T> = catalog
        .list()
        .await
        .with_context(|| format!("fetch {}", T::COLLECTION))?;

    let item = filter::find_one(&items, term)
        .map_err(FilterError::into_labels)
        .with_context(|| format!("find {}", T::KIND))?;
    debug!("Resolved {:?} to {} {}", term, T::KIND, item);
    Ok(item.clone())
}

/// Resolve `term` among the products of one type
async fn resolve_product<C: Catalog>(catalog: &C, product_type: ProductType, term: &str) -> Result<Product> {
    let mut products: Vec<Product> = catalog.list().await.context("fetch products")?;
    products.retain(|product| product.product_type == product_type);

    let product = filter::find_one(&products, term)
        .map_err(FilterError::into_labels)
        .context("find product")?;
    Ok(product.clone())
}

/// Resolve `term` to a network, which has to belong to `location`
async fn resolve_network<C: Catalog>(catalog: &C, term: &str, location: &Location) -> Result<Network> {
    let network: Network = resolve(catalog, term).await?;
    if network.location.id != location.id {
        return Err(CloudError::InvalidInput(format!(
            "network {} is not available in location {}",
            network.name, location.name
        ))
        .into());
    }
    Ok(network)
}

async fn create_cluster<C, W>(catalog: &C, writer: &mut ConsoleWriter<W>, args: ClusterCreateArgs) -> Result<()>
where
    C: Catalog,
    W: io::Write,
{
    let location: Location = resolve(catalog, &args.location).await?;
    let worker_product = resolve_product(catalog, ProductType::KubernetesNode, &args.worker_product).await?;
    let network = match args.network.as_deref() {
        Some(term) => Some(resolve_network(catalog, term, &location).await?),
        None => None,
    };

    let request = ClusterCreate {
        name: args.name,
        location: Reference::new(location.id, location.key),
        network: network.map(|network| Reference::new(network.id, network.name)),
        worker_product: Reference::new(worker_product.id, worker_product.name),
        worker_count: args.worker_count,
    };
    let cluster: Cluster = catalog.create(request).await.context("create cluster")?;

    info!("Created {} {}", Cluster::KIND, cluster);
    writer.write_record(&cluster)?;
    Ok(())
}

async fn create_device<C, W>(catalog: &C, writer: &mut ConsoleWriter<W>, args: DeviceCreateArgs) -> Result<()>
where
    C: Catalog,
    W: io::Write,
{
    let location: Location = resolve(catalog, &args.location).await?;
    let product = resolve_product(catalog, ProductType::MacBareMetal, &args.product).await?;
    let network = resolve_network(catalog, &args.network, &location).await?;

    let request = DeviceCreate {
        name: args.name,
        location: Reference::new(location.id, location.key),
        product: Reference::new(product.id, product.name),
        network: Reference::new(network.id, network.name),
    };
    let device: Device = catalog.create(request).await.context("create device")?;

    info!("Created {} {}", Device::KIND, device);
    writer.write_record(&device)?;
    Ok(())
}

async fn update<T, C, W>(
    catalog: &C,
    writer: &mut ConsoleWriter<W>,
    term: &str,
    changes: T::Update,
) -> Result<()>
where
    T: Mutable + Displayable + Filterable,
    C: Catalog,
    W: io::Write,
{
    if T::is_noop(&changes) {
        return Err(CloudError::InvalidInput(format!("nothing to update for {} {:?}", T::KIND, term)).into());
    }

    let item: T = resolve(catalog, term).await?;
    let updated: T = catalog
        .update(item.id(), changes)
        .await
        .with_context(|| format!("update {}", T::KIND))?;

    info!("Updated {} {}", T::KIND, updated);
    writer.write_record(&updated)?;
    Ok(())
}

async fn delete<T, C, W, E>(
    catalog: &C,
    writer: &mut ConsoleWriter<W>,
    console: &mut Console<E>,
    term: &str,
    force: bool,
) -> Result<()>
where
    T: Resource + Filterable,
    C: Catalog,
    W: io::Write,
    E: io::Write,
{
    let item: T = resolve(catalog, term).await?;

    if !force {
        let confirmed = console
            .confirm_deletion(T::KIND, &item, &mut io::stdin().lock())
            .context("read confirmation")?;
        if !confirmed {
            console.println("aborted.")?;
            return Ok(());
        }
    }

    catalog
        .delete::<T>(item.id())
        .await
        .with_context(|| format!("delete {}", T::KIND))?;

    writer.write_message(&format!("Deleted {} {}", T::KIND, item))?;
    Ok(())
}

async fn raw<C, W>(catalog: &C, writer: &mut ConsoleWriter<W>, collection: Option<String>) -> Result<()>
where
    C: Catalog,
    W: io::Write,
{
    let Some(collection) = collection else {
        for name in catalog.collections().await {
            writer.write_message(&name)?;
        }
        return Ok(());
    };

    let value = catalog
        .raw(&collection)
        .await
        .with_context(|| format!("fetch {}", collection))?;
    writer
        .write_raw(value)
        .with_context(|| format!("display {}", collection))?;
    Ok(())
}

fn execute_config_command<W: io::Write>(
    command: ConfigCommand,
    writer: &mut ConsoleWriter<W>,
    config: &CloudConfig,
    config_manager: &ConfigManager,
) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let content = toml::to_string_pretty(config).context("serialize configuration")?;
            writer.write_message(content.trim_end())?;
        }
        ConfigCommand::Validate { file } => {
            match file {
                Some(path) => {
                    config_manager.load_config_from_path(&path)?;
                    writer.write_message(&format!("Configuration file '{}' is valid", path.display()))?;
                }
                None => {
                    config_manager.load_config()?;
                    writer.write_message("Current configuration is valid")?;
                }
            }
        }
        ConfigCommand::Init { dir, global } => {
            if global {
                let global_path = config_manager.get_global_config_path_ref();
                config_manager.save_config_to_path(global_path, &CloudConfig::default())?;
                writer.write_message(&format!("Global configuration initialized at '{}'", global_path.display()))?;
            } else {
                let dir = match dir {
                    Some(dir) => dir,
                    None => std::env::current_dir().context("determine current directory")?,
                };
                let path = config_manager.init_project_config(&dir)?;
                writer.write_message(&format!("Project configuration initialized at '{}'", path.display()))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::core::table::RenderOptions;
    use clap::Parser;
    use serde_json::json;

    fn catalog() -> SnapshotCatalog {
        SnapshotCatalog::from_value(json!({
            "locations": [
                {"id": 1, "name": "Alpnach", "key": "ALP1", "city": "Alpnach Dorf"},
                {"id": 2, "name": "Zurich", "key": "ZRH1", "city": "Zurich"}
            ],
            "clusters": [
                {"id": 10, "name": "alpha", "status": "running",
                 "location": {"id": 1, "name": "ALP1"},
                 "worker_product": {"id": 4, "name": "b1.4x8"}, "worker_count": 3},
                {"id": 11, "name": "alpha-2", "status": "running",
                 "location": {"id": 1, "name": "ALP1"},
                 "worker_product": {"id": 4, "name": "b1.4x8"}, "worker_count": 1}
            ],
            "products": [
                {"id": 4, "name": "b1.4x8", "type": "kubernetes-node", "cpu": 4, "memory": 8, "price": 120.0},
                {"id": 5, "name": "b1.4x16", "type": "kubernetes-node", "cpu": 4, "memory": 16, "price": 180.0},
                {"id": 6, "name": "b1.8x32", "type": "kubernetes-node", "cpu": 8, "memory": 32, "price": 320.0},
                {"id": 7, "name": "b1.4x8-vm", "type": "compute-server", "cpu": 4, "memory": 8, "price": 90.0},
                {"id": 9, "name": "mac-mini-m2", "type": "mac-bare-metal", "cpu": 8, "memory": 16, "price": 99.0}
            ],
            "networks": [
                {"id": 20, "name": "alp-private", "cidr": "10.0.0.0/24", "location": {"id": 1, "name": "ALP1"}},
                {"id": 21, "name": "zrh-private", "cidr": "10.1.0.0/24", "location": {"id": 2, "name": "ZRH1"}}
            ]
        }))
        .unwrap()
    }

    async fn run(catalog: &SnapshotCatalog, argv: &[&str]) -> (Result<()>, String) {
        let args = Args::try_parse_from(std::iter::once("cloudbit").chain(argv.iter().copied())).unwrap();
        let mut writer = ConsoleWriter::with_writer(Vec::new(), OutputFormat::Csv, RenderOptions::new(",", false));
        let mut console = Console::new(Vec::new(), false);
        let result = execute_resource_command(args.command, catalog, &mut writer, &mut console).await;
        (result, String::from_utf8(writer.into_inner()).unwrap())
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let catalog = catalog();
        let (result, output) = run(&catalog, &["location", "list", "--filter", "zrh"]).await;
        result.unwrap();
        assert_eq!(output, "ID,NAME,KEY,CITY,MODULES\n2,Zurich,ZRH1,Zurich,\n");
    }

    #[tokio::test]
    async fn test_update_resolves_term() {
        let catalog = catalog();
        let (result, output) =
            run(&catalog, &["kubernetes", "cluster", "update", "alpha-2", "--name", "beta"]).await;
        result.unwrap();
        assert!(output.contains("11,beta,running"));
    }

    #[tokio::test]
    async fn test_ambiguous_term_is_reported() {
        let catalog = catalog();
        let (result, output) =
            run(&catalog, &["kubernetes", "cluster", "update", "alpha", "--name", "x"]).await;

        let err = result.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("find kubernetes cluster: found multiple matches"));
        assert!(message.contains("alpha (10), alpha-2 (11)"));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_force() {
        let catalog = catalog();
        let (result, output) = run(&catalog, &["kubernetes", "cluster", "delete", "alpha-2", "--force"]).await;
        result.unwrap();
        assert_eq!(output, "Deleted kubernetes cluster alpha-2 (11)\n");

        let clusters: Vec<Cluster> = catalog.list().await.unwrap();
        assert_eq!(clusters.len(), 1);
    }

    #[tokio::test]
    async fn test_update_without_changes() {
        let catalog = catalog();
        let (result, _) = run(&catalog, &["kubernetes", "cluster", "update", "alpha-2"]).await;
        assert!(result.unwrap_err().to_string().contains("nothing to update"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let catalog = catalog();
        let (result, _) = run(&catalog, &["mac-bare-metal", "device", "delete", "mac-1", "-f"]).await;
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<filter::FilterError>(),
            Some(filter::FilterError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_raw_collection() {
        let catalog = catalog();
        let (result, output) = run(&catalog, &["raw", "locations"]).await;
        result.unwrap();
        assert_eq!(output.lines().next(), Some("CITY,ID,KEY,NAME"));

        let (result, output) = run(&catalog, &["raw"]).await;
        result.unwrap();
        assert_eq!(output, "clusters\nlocations\nnetworks\nproducts\n");
    }

    #[tokio::test]
    async fn test_create_cluster() {
        let catalog = catalog();
        let (result, output) = run(
            &catalog,
            &[
                "kubernetes", "cluster", "create", "--name", "staging", "--location", "alpnach", "--network",
                "alp-private", "--worker-product", "b1.8x32", "--worker-count", "2",
            ],
        )
        .await;
        result.unwrap();
        assert_eq!(
            output,
            "ID,NAME,STATUS,LOCATION,WORKERS,NETWORK,EXTERNAL_IP\n12,staging,creating,ALP1,2 x b1.8x32,alp-private,\n"
        );

        let clusters: Vec<Cluster> = catalog.list().await.unwrap();
        assert_eq!(clusters.len(), 3);
    }

    #[tokio::test]
    async fn test_create_cluster_ambiguous_product() {
        let catalog = catalog();
        let (result, output) = run(
            &catalog,
            &["kubernetes", "cluster", "create", "-n", "staging", "-l", "ALP1", "--worker-product", "b1.4x"],
        )
        .await;

        // Compute products of the same name prefix are not candidates
        let message = format!("{:#}", result.unwrap_err());
        assert_eq!(
            message,
            "find product: found multiple matches for \"b1.4x\": b1.4x8 (4), b1.4x16 (5)"
        );
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_create_cluster_network_in_other_location() {
        let catalog = catalog();
        let (result, _) = run(
            &catalog,
            &[
                "kubernetes", "cluster", "create", "-n", "staging", "-l", "ALP1", "--network", "zrh-private",
                "--worker-product", "b1.8x32",
            ],
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: network zrh-private is not available in location Alpnach");
        let clusters: Vec<Cluster> = catalog.list().await.unwrap();
        assert_eq!(clusters.len(), 2);
    }

    #[tokio::test]
    async fn test_create_device() {
        let catalog = catalog();
        let (result, output) = run(
            &catalog,
            &[
                "mac-bare-metal", "device", "create", "-n", "build-1", "-l", "zurich", "--product", "mac",
                "--network", "zrh",
            ],
        )
        .await;
        result.unwrap();
        assert_eq!(
            output,
            "ID,NAME,STATUS,LOCATION,PRODUCT,NETWORK,ELASTIC_IP\n1,build-1,creating,ZRH1,mac-mini-m2,zrh-private,\n"
        );
    }

    #[tokio::test]
    async fn test_create_device_unknown_location() {
        let catalog = catalog();
        let (result, _) = run(
            &catalog,
            &["mac-bare-metal", "device", "create", "-n", "x", "-l", "gva", "--product", "mac", "--network", "zrh"],
        )
        .await;

        let message = format!("{:#}", result.unwrap_err());
        assert_eq!(message, "find location: no match found for \"gva\"");
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from(["cloudbit", "-o", "csv", "--separator", ";", "--snapshot", "s.json", "version"])
            .unwrap();
        let mut config = CloudConfig::default();
        apply_overrides(&mut config, &args);

        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.output.render_options(), RenderOptions::new(";", false));
        assert_eq!(config.global.snapshot, Some("s.json".into()));
    }
}
