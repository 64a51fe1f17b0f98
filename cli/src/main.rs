mod coingecko;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;

use bitrewards_core::{BoostType, CustomerLevel, Deposit, RewardsConfig, TokenType};
use economics::{calculate_tvl, distribute_yield, CachedPrice, PriceCalculator, YieldFormula};
use points::{
    days_to_next_milestone, generate_referral_code, next_streak_milestone, LoginState,
    ReferralQuota,
};
use reputation::{
    determine_level, level_change, EngagementKind, LevelStanding, PostRewardState, RewardTable,
};

use crate::coingecko::CoinGecko;

#[derive(Parser)]
#[command(name = "bitrewards")]
#[command(about = "BitRewards reward and reputation calculator")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Path to rewards configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Total value locked for a set of deposits
    Tvl {
        /// Deposit principal amounts
        #[arg(required = true, num_args = 1..)]
        amounts: Vec<f64>,

        /// Spot price; fetched from CoinGecko when omitted
        #[arg(long)]
        price: Option<f64>,

        #[arg(long, default_value = "btc")]
        token: TokenType,
    },

    /// Customer level for a TVL
    Level {
        tvl: f64,

        /// Stored level, to report promotions and demotions
        #[arg(long)]
        previous: Option<CustomerLevel>,
    },

    /// Reward for one engagement on a gamified post
    Engage {
        #[arg(long)]
        level: CustomerLevel,

        /// Tier reward for the user's level
        #[arg(long)]
        reward: f64,

        /// Tier like cap (0 = uncapped)
        #[arg(long, default_value_t = 0)]
        cap: u64,

        /// Likes on the post before this engagement
        #[arg(long, default_value_t = 0)]
        likes: u64,

        /// Remaining reward pool
        #[arg(long)]
        budget: f64,

        #[arg(long)]
        dislike: bool,
    },

    /// Split a yield amount for a boost type
    Split {
        amount: f64,

        #[arg(long, default_value = "boost_me")]
        boost: BoostType,
    },

    /// Yield accrued on a principal
    Accrue {
        principal: f64,

        #[arg(long)]
        days: f64,

        /// Annual rate as a fraction; the token's configured APY otherwise
        #[arg(long)]
        apy: Option<f64>,

        #[arg(long, default_value = "btc")]
        token: TokenType,

        /// Compounding periods per year; simple interest when omitted
        #[arg(long)]
        compound: Option<u32>,
    },

    /// Advance a login streak
    Streak {
        /// Last login date (YYYY-MM-DD)
        #[arg(long)]
        last: Option<NaiveDate>,

        #[arg(long, default_value_t = 0)]
        streak: u32,

        /// Login date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Check a weekly referral quota
    Referral {
        #[arg(long)]
        used: u32,

        /// Weekly invite limit; configured value when omitted
        #[arg(long)]
        max: Option<u32>,

        /// Week reset instant (RFC 3339)
        #[arg(long)]
        reset: Option<DateTime<Utc>>,
    },

    /// Generate a referral code
    Code,

    /// Current BTC spot price
    Price,
}

fn load_config(path: Option<&PathBuf>) -> Result<RewardsConfig> {
    match path {
        Some(path) => RewardsConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(RewardsConfig::default()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn spot_price(config: &RewardsConfig) -> Result<f64> {
    let source = CoinGecko::new(Duration::from_secs(10))?;
    let mut feed = CachedPrice::from_settings(source, &config.price);
    Ok(feed.price())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn at_noon(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN + chrono::Duration::hours(12))
        .and_utc()
}

fn run(cli: Cli, config: &RewardsConfig) -> Result<()> {
    match cli.command {
        Command::Tvl {
            amounts,
            price,
            token,
        } => {
            let price = match price {
                Some(p) => p,
                None => spot_price(config)?,
            };
            let deposits: Vec<Deposit> = amounts.iter().map(|a| Deposit::new(*a, token)).collect();
            let tvl = calculate_tvl(&deposits, price);
            let standing = LevelStanding::compute(tvl, &config.levels);

            if cli.json {
                return print_json(&json!({ "price": price, "standing": standing }));
            }
            println!("{}: {}", "Price".yellow().bold(), PriceCalculator::format_usd(price));
            println!("{}: {}", "TVL".yellow().bold(), PriceCalculator::format_usd(tvl).green());
            println!("{}: {}", "Level".yellow().bold(), standing.level.to_string().cyan());
            if let (Some(next), Some(gap)) = (standing.next_level, standing.tvl_to_next) {
                println!("  {} more to reach {}", PriceCalculator::format_usd(gap), next);
            }
        }

        Command::Level { tvl, previous } => {
            let level = determine_level(tvl, &config.levels);
            let change = previous.and_then(|p| level_change(p, level));

            if cli.json {
                return print_json(&json!({ "level": level, "change": change }));
            }
            println!("{}: {}", "Level".yellow().bold(), level.to_string().cyan());
            if let Some(change) = change {
                println!("  {:?}", change);
            }
        }

        Command::Engage {
            level,
            reward,
            cap,
            likes,
            budget,
            dislike,
        } => {
            let table = RewardTable::default().with_tier(level, reward, cap);
            let mut post = PostRewardState::gamified(budget, table);
            post.like_count = likes;

            let kind = if dislike {
                EngagementKind::Dislike
            } else {
                EngagementKind::Like
            };
            let outcome = post.engage(kind, level, &config.points)?;

            if cli.json {
                return print_json(&json!({ "outcome": outcome, "post": post }));
            }
            println!("{}: {}", "Reward".yellow().bold(), outcome.reward.to_string().green());
            if outcome.capped_by_budget {
                println!("  {}", "capped by remaining pool".bright_black());
            }
            println!("{}: {}", "Points".yellow().bold(), outcome.points);
            println!(
                "{}: {} likes, {} left in pool",
                "Post".yellow().bold(),
                post.like_count,
                post.pool.remaining()
            );
        }

        Command::Split { amount, boost } => {
            let d = distribute_yield(amount, boost, &config.split);

            if cli.json {
                return print_json(&json!({ "boost": boost, "distribution": d }));
            }
            println!("{} ({})", "Yield split".yellow().bold(), boost);
            println!("  user:     {}", PriceCalculator::format_btc(d.to_user));
            println!("  brand:    {}", PriceCalculator::format_btc(d.to_brand));
            println!("  protocol: {}", PriceCalculator::format_btc(d.to_protocol));
            println!("  referrer: {}", PriceCalculator::format_btc(d.to_referrer));
        }

        Command::Accrue {
            principal,
            days,
            apy,
            token,
            compound,
        } => {
            let apy = apy.unwrap_or_else(|| config.apy.for_token(token));
            let formula = match compound {
                Some(periods_per_year) => YieldFormula::Compound { periods_per_year },
                None => YieldFormula::Simple,
            };
            let earned = formula.accrue(principal, apy, days);

            if cli.json {
                return print_json(&json!({ "formula": formula, "apy": apy, "yield": earned }));
            }
            println!(
                "{}: {} {} ({:?}, {:.2}% APY over {} days)",
                "Yield".yellow().bold(),
                PriceCalculator::format_btc(earned).green(),
                token,
                formula,
                apy * 100.0,
                days
            );
        }

        Command::Streak {
            last,
            streak,
            today,
        } => {
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let mut state = LoginState {
                last_login: last.map(at_noon),
                streak,
            };
            let outcome = state.record_login(at_noon(today), &config.points, &config.streak);
            let next = next_streak_milestone(outcome.streak, &config.streak);

            if cli.json {
                return print_json(&json!({ "outcome": outcome, "next_milestone": next }));
            }
            println!("{}: {} days", "Streak".yellow().bold(), outcome.streak.to_string().cyan());
            println!(
                "{}: {}",
                "Points".yellow().bold(),
                outcome.points_awarded().to_string().green()
            );
            if outcome.streak_bonus > 0 {
                println!("  Streak bonus! {} days in a row", outcome.streak);
            }
            match (next, days_to_next_milestone(outcome.streak, &config.streak)) {
                (Some(milestone), Some(days)) => {
                    println!("  {} days to the {}-day milestone", days, milestone)
                }
                _ => println!("  {}", "All streak milestones reached".bright_black()),
            }
        }

        Command::Referral { used, max, reset } => {
            let now = Utc::now();
            let quota = ReferralQuota {
                invites_used_this_week: used,
                max_invites_per_week: max.unwrap_or(config.referral.max_invites_per_week),
                week_reset_date: reset,
            };
            let allowed = quota.can_invite(now);
            let remaining = quota.remaining(now);

            if cli.json {
                return print_json(&json!({ "can_invite": allowed, "remaining": remaining }));
            }
            if allowed {
                println!("{} ({} invites left this week)", "✓ Can invite".green(), remaining);
            } else {
                println!("{}", "✗ Weekly invite limit reached".red());
            }
        }

        Command::Code => {
            let code = generate_referral_code(&mut rand::rng());
            if cli.json {
                return print_json(&json!({ "referral_code": code }));
            }
            println!("{}", code.bright_blue());
        }

        Command::Price => {
            let price = spot_price(config)?;
            if cli.json {
                return print_json(&json!({ "usd": price }));
            }
            println!("{}: {}", "BTC".yellow().bold(), PriceCalculator::format_usd(price));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    run(cli, &config)
}
