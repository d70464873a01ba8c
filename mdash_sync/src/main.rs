use mdash_api::{ApiConfig, DeviceConfig, MdashClient, ShadowPoster};
use mdash_app::ContextProvider;
use mdash_widgets::{WidgetsConfig, import_widgets, ui_document};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Config {
    device: DeviceConfig,
    api: ApiConfig,
    widgets: WidgetsConfig,
}

#[derive(Debug, Clone)]
struct AppContext {
    client: MdashClient,
    widgets: WidgetsConfig,
}

impl ContextProvider<Config> for AppContext {
    async fn new(config: Config) -> Self {
        Self {
            client: MdashClient::new(config.api, config.device),
            widgets: config.widgets,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Ui,
    Label(Option<String>),
    Print,
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [command] if command == "ui" => Some(Self::Ui),
            [command] if command == "print" => Some(Self::Print),
            [command] if command == "label" => Some(Self::Label(None)),
            [command, label] if command == "label" => {
                Some(Self::Label(Some(label.clone())))
            }
            _ => None,
        }
    }
}

/// Run `command` against `poster`. Returns the printed document, if any.
///
/// Delivery failures are logged and otherwise ignored; the dashboard is not
/// retried.
async fn run<P: ShadowPoster>(
    poster: &P,
    widgets: &WidgetsConfig,
    command: &Command,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    match command {
        Command::Ui => {
            let widgets = import_widgets(widgets)?;
            info!("Sending {} widgets", widgets.len());

            if let Err(e) = mdash_api::create_ui(poster, &widgets).await {
                error!("Failed to create dashboard UI: {}", e);
            }
            Ok(None)
        }
        Command::Label(label) => {
            if let Err(e) = mdash_api::set_label(poster, label.as_deref()).await
            {
                error!("Failed to set device label: {}", e);
            }
            Ok(None)
        }
        Command::Print => {
            let widgets = import_widgets(widgets)?;
            Ok(Some(ui_document(&widgets)))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("mdash_sync", String::as_str);
    let Some(command) = Command::parse(args.get(1..).unwrap_or_default())
    else {
        eprintln!("Usage: {program} <ui | label [text] | print>");
        std::process::exit(1);
    };

    let context =
        mdash_app::create_app_context::<AppContext, Config>().await?;

    if let Some(document) =
        run(&context.client, &context.widgets, &command).await?
    {
        println!("{document}");
    }

    Ok(())
}
