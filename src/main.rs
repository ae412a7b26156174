use chrono::{Datelike, Local};
use clap::Parser;
use concert_pages::{api, cli, commands, config, error, logging};
use cli::{Cli, Commands, StampAction};
use config::Config;
use error::Result;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;
    let today = Local::now().date_naive();

    let connect = |config: &Config| -> Result<api::HttpApi> {
        api::HttpApi::new(
            &config.base_url()?,
            config.session(),
            Duration::from_secs(config.timeout_seconds),
        )
    };

    match cli.command {
        Commands::Calendar { month, date, regions, prev, next } => {
            println!("📅 공연 캘린더\n");
            let args = commands::CalendarArgs {
                month,
                date,
                regions,
                month_delta: next as i32 - prev as i32,
            };
            commands::run_calendar(connect(&config)?, today, args).await?;
        }

        Commands::Home => {
            println!("🏠 홈\n");
            commands::run_home(
                connect(&config)?,
                today,
                config.recent_limit,
                config.ticket_window_days,
            )
            .await?;
        }

        Commands::Stamps { action } => {
            println!("🎫 스탬프\n");
            let api = connect(&config)?;
            match action {
                StampAction::List { start_year, start_month, end_year, end_month } => {
                    let period = commands::period_from_args(
                        today.year(),
                        start_year,
                        start_month,
                        end_year,
                        end_month,
                    );
                    commands::run_stamp_list(api, today, period).await?;
                }
                StampAction::Collect => {
                    commands::run_stamp_collect(api, today, config.available_stamp_days).await?
                }
                StampAction::Detail { id } => commands::run_stamp_detail(api, today, id).await?,
            }
        }

        Commands::Config { set_base_url, set_token, clear_token, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
                println!("✔ API 서버 주소를 설정했습니다");
            }

            if let Some(token) = set_token {
                config.set_access_token(Some(token));
                changed = true;
                println!("✔ 액세스 토큰을 설정했습니다");
            } else if clear_token {
                config.set_access_token(None);
                changed = true;
                println!("✔ 액세스 토큰을 삭제했습니다");
            }

            if changed {
                config.save()?;
            }

            if show {
                println!("설정:");
                println!("  API 서버: {}", config.base_url.as_deref().unwrap_or("미설정"));
                println!("  토큰: {}", if config.access_token.is_some() { "설정됨" } else { "미설정" });
                println!("  타임아웃: {}초", config.timeout_seconds);
                println!("  최근 공연 개수: {}", config.recent_limit);
                println!("  티켓 오픈 기간: {}일", config.ticket_window_days);
                println!("  스탬프 수집 가능 기간: {}일", config.available_stamp_days);
            }
        }
    }

    Ok(())
}
