use clap::Parser;
use fortune_common::{t, AnalysisClient, Locale, RunOutcome, Session, RESULTS_TRANSITION_DELAY};
use fortune_teller::{cli, config, error, input, logging, render, report, runner, transport};
use cli::{Cli, Commands};
use config::Config;
use error::{FortuneError, Result};
use input::InputArgs;
use report::Report;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { name, dob, hour, minute, meridiem, photo, locale, output, interactive } => {
            let locale = locale.unwrap_or(config.default_locale);
            println!("🔮 {}\n", t(locale, "appTitle", &[]));

            let user_input = input::collect_input(
                locale,
                InputArgs { name, dob, hour, minute, meridiem, photo, interactive },
            )?;

            let transport = transport::GeminiTransport::from_config(&config)?;
            let client = AnalysisClient::new(transport).with_temperature(config.temperature);

            let mut session = Session::new(locale);
            let view = render::ProgressView::new(locale, fortune_common::CategoryKey::ALL.len());
            let outcome = runner::run_analysis(
                &client,
                &mut session,
                user_input.clone(),
                &view,
                RESULTS_TRANSITION_DELAY,
            )
            .await?;

            render::print_results(locale, &user_input.name, session.browser());

            if let Some(path) = output {
                let report = Report {
                    name: user_input.name.clone(),
                    dob: user_input.dob.clone(),
                    tob: user_input.tob.clone(),
                    locale,
                    results: session.browser().results().clone(),
                };
                report.save(&path)?;
                println!("{}", t(locale, "cliResultsSaved", &[("path", &path.display().to_string())]));
            }

            if interactive {
                let first = session.browser().cards().next().map(|(key, _)| key);
                if let Some(key) = first {
                    render::browse(locale, session.browser_mut(), key)?;
                }
            }

            if outcome == RunOutcome::AllFailed {
                std::process::exit(1);
            }
        }

        Commands::Show { input, category, locale, interactive } => {
            let report = Report::load(&input)?;
            let locale: Locale = locale.unwrap_or(report.locale);
            let mut browser = fortune_common::ResultsBrowser::new(report.results);

            match category {
                Some(key) if interactive => render::browse(locale, &mut browser, key)?,
                Some(key) => {
                    if !browser.open(key) {
                        return Err(FortuneError::InvalidInput(format!("no result for category: {}", key)));
                    }
                    if let Some((key, result)) = browser.current() {
                        render::print_detail(locale, key, result);
                    }
                }
                None => {
                    render::print_results(locale, &report.name, &browser);
                    let first = browser.cards().next().map(|(key, _)| key);
                    if let (true, Some(key)) = (interactive, first) {
                        render::browse(locale, &mut browser, key)?;
                    }
                }
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定ファイル: {}", Config::config_path()?.display());
                println!("APIキー: {}", if config.get_api_key().is_some() { "設定済み" } else { "未設定" });
                println!("モデル: {}", config.model);
                println!("温度: {}", config.temperature);
                println!("タイムアウト: {}秒", config.timeout_seconds);
                println!("既定の言語: {}", config.default_locale.display_name());
            }
        }
    }

    Ok(())
}
