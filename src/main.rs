use address_match::{cli, config, error, export, matcher, reader};
use address_match_common::{extract, match_address, normalize};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Match {
            database,
            input,
            output,
            format,
            address_column,
            manager_column,
            min_street_len,
            min_similarity,
        } => {
            println!("🏠 address-match - 住所照合\n");

            let mut config = config;
            config.apply_overrides(address_column, manager_column, min_street_len, min_similarity);
            config.validate()?;

            // 1. 参照台帳
            println!("[1/3] 参照台帳を読み込み中...");
            let reference = matcher::load_reference(&database, &config)?;
            println!(
                "✔ {}件を登録（不正行 {}件）\n",
                reference.build.index.len(),
                reference.build.errors.len()
            );
            for err in &reference.build.errors {
                println!("  ⚠ {}", err);
            }

            // 2. 照合
            let inputs = reader::read_input_addresses(&input)?;
            println!("[2/3] {}件の住所を照合中...", inputs.len());
            let progress = ProgressBar::new(inputs.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} ({elapsed})") {
                progress.set_style(style);
            }
            let report = matcher::run_matching(&reference, &inputs, &config.match_options(), || progress.inc(1));
            progress.finish_and_clear();
            println!(
                "✔ 照合完了: 一致 {}件 / 該当なし {}件\n",
                report.summary.matched_inputs, report.summary.unmatched_inputs
            );

            // 3. 出力
            println!("[3/3] 結果を保存中... ({})", format);
            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            for path in export::export_report(&report, &format, &output_dir)? {
                println!("✔ 出力: {}", path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Normalize { addresses, database } => {
            if database.is_some() {
                config.validate()?;
            }
            let options = config.match_options();
            let reference = database
                .map(|path| matcher::load_reference(&path, &config))
                .transpose()?;
            for raw in &addresses {
                let normalized = normalize(raw);
                let extracted = extract(&normalized);
                println!("{}", raw);
                println!("  正規化: {}", normalized);
                println!("  番地:   {}", extracted.number.as_deref().unwrap_or("-"));
                println!("  通り名: {}", extracted.street);
                if let Some(reference) = &reference {
                    let matches = match_address(&reference.build.index, raw, &options);
                    match matches.tier {
                        Some(tier) => println!("  一致:   {}件 ({})", matches.records.len(), tier),
                        None => println!("  一致:   0件"),
                    }
                }
            }
        }

        Commands::Config {
            show,
            set_address_column,
            set_manager_column,
            set_min_street_len,
            set_min_similarity,
        } => {
            let mut config = config;
            let changed = config.apply_overrides(
                set_address_column,
                set_manager_column,
                set_min_street_len,
                set_min_similarity,
            );

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  住所列: {}", config.address_column);
                println!("  管理会社列: {}", config.manager_column);
                println!("  接頭辞の最小文字数: {}", config.min_street_len);
                println!("  類似度閾値: {}", config.min_similarity);
            }
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
            builder.filter_level(level);
        }
    }
    builder.init();
}
