use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::DeployOptions;
use crate::domain::models::Roll20Options;
use crate::domain::services::DeployService;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .short('u')
        .long(ConfigKey::Username.to_string())
        .env("ROLL20_USERNAME")
        .num_args(1)
        .help("The email address used to sign in to Roll20.");
}

fn arg_password() -> Arg {
    return Arg::new(ConfigKey::Password.to_string())
        .short('p')
        .long(ConfigKey::Password.to_string())
        .env("ROLL20_PASSWORD")
        .num_args(1)
        .help("The Roll20 account password.");
}

fn arg_campaign() -> Arg {
    return Arg::new(ConfigKey::Campaign.to_string())
        .short('c')
        .long(ConfigKey::Campaign.to_string())
        .env("ROLL20_CAMPAIGN")
        .num_args(1)
        .help("The id of the campaign to deploy to, as seen in its URL.");
}

fn arg_script_name() -> Arg {
    return Arg::new(ConfigKey::ScriptName.to_string())
        .short('n')
        .long(ConfigKey::ScriptName.to_string())
        .env("ROLL20_SCRIPT_NAME")
        .num_args(1)
        .help("The script name shown in the campaign's API scripts editor. Defaults to the file stem of FILE.");
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .long(ConfigKey::ConfigFile.to_string())
        .env("ROLL20_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to a configuration file. [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

pub fn build() -> Command {
    return Command::new("roll20-deploy")
        .about("Deploys a Roll20 API script to a campaign.")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(
            Arg::new("file")
                .help("Path to the script file to deploy.")
                .num_args(1),
        )
        .arg(arg_username())
        .arg(arg_password())
        .arg(arg_campaign())
        .arg(arg_script_name())
        .arg(arg_config_file());
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(());
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => create_config_file().await?,
                Some(("default", _)) => print!("{}", Config::serialize_default(build())),
                Some(("path", _)) => println!("{}", Config::default(ConfigKey::ConfigFile)),
                _ => {}
            }
            return Ok(());
        }
        _ => {}
    }

    Config::load(vec![&matches]).await?;

    let file = match matches.get_one::<String>("file") {
        Some(file) => file.to_string(),
        None => bail!("No script file provided. See 'roll20-deploy --help'."),
    };

    if Config::get(ConfigKey::ScriptName).is_empty() {
        let stem = path::PathBuf::from(&file)
            .file_stem()
            .map(|e| return e.to_string_lossy().to_string())
            .unwrap_or_default();
        Config::set(ConfigKey::ScriptName, &stem);
    }

    for key in [ConfigKey::Username, ConfigKey::Password, ConfigKey::Campaign] {
        if Config::get(key).is_empty() {
            bail!(format!(
                "Missing required setting '{key}'. Pass it as a flag, environment variable, or config file entry."
            ));
        }
    }

    let code = fs::read_to_string(&file).await?;

    let options = DeployOptions {
        name: Config::get(ConfigKey::ScriptName),
        roll20: Roll20Options {
            username: Config::get(ConfigKey::Username),
            password: Config::get(ConfigKey::Password),
            campaign: Config::get(ConfigKey::Campaign),
        },
    };

    DeployService::deploy(&code, &options).await?;

    println!(
        "Deployed {name} to campaign {campaign}!",
        name = options.name,
        campaign = options.roll20.campaign
    );
    return Ok(());
}
