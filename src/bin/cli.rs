use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use talent_match_engine::{
    catalog::{LANGUAGE_OPTIONS, LOCATION_OPTIONS},
    filter::strict_filter,
    ranking::{relaxed, Arbiter},
    Availability, Budget, Catalog, DisplayMode, EngineOptions, FilterState, ProjectNeeds,
    RecommendationEngine, SkillCategory, Talent, Timeline,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "talent-match")]
#[command(about = "Talent Match Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Engine options JSON file
    #[arg(short, long, global = true)]
    options: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend freelancers for a filter state
    Recommend {
        #[command(flatten)]
        filters: FilterArgs,

        /// Results view mode
        #[arg(short, long, default_value = "fairness")]
        mode: DisplayMode,

        /// Free-text search over name, title, skills and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Maximum shortlist length
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },

    /// Show every strategy's quality score and the relaxed-match breakdown
    Explain {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the catalog
    Catalog,
}

#[derive(Args)]
struct FilterArgs {
    /// Minimum hourly rate
    #[arg(long, default_value = "0")]
    min_rate: f64,

    /// Maximum hourly rate
    #[arg(long, default_value = "150")]
    max_rate: f64,

    /// Required skill (repeatable)
    #[arg(short, long = "skill")]
    skills: Vec<String>,

    /// Accepted availability (repeatable)
    #[arg(short, long)]
    availability: Vec<Availability>,

    /// Minimum rating (0 = any)
    #[arg(short = 'r', long, default_value = "0")]
    min_rating: f64,

    /// Location substring (repeatable)
    #[arg(short, long = "location")]
    locations: Vec<String>,

    /// Spoken language (repeatable)
    #[arg(long = "language")]
    languages: Vec<String>,

    /// Project-needs focus category
    #[arg(long)]
    needs_focus: Option<SkillCategory>,

    /// Project-needs budget (low, medium, high)
    #[arg(long)]
    needs_budget: Option<Budget>,

    /// Project-needs timeline (urgent, flexible, ongoing)
    #[arg(long)]
    needs_timeline: Option<Timeline>,
}

impl FilterArgs {
    fn to_filter_state(&self) -> anyhow::Result<FilterState> {
        let filters = FilterState::new()
            .with_rate_range(self.min_rate, self.max_rate)
            .with_skills(self.skills.iter().cloned())
            .with_availability(self.availability.iter().copied())
            .with_min_rating(self.min_rating)
            .with_locations(self.locations.iter().cloned())
            .with_languages(self.languages.iter().cloned());

        let answered = self.needs_focus.is_some() || self.needs_budget.is_some() || self.needs_timeline.is_some();
        let filters = if answered {
            ProjectNeeds {
                focus: self.needs_focus,
                budget: self.needs_budget,
                timeline: self.needs_timeline,
            }
            .apply(&filters)
        } else {
            filters
        };

        filters.validate()?;
        Ok(filters)
    }
}

fn print_talents(talents: &[Talent]) {
    for (i, t) in talents.iter().enumerate() {
        println!(
            "   {:>2}. {:<22} {:<28} ★{:.1}  ${:>5.0}/h  {:<9}  {}",
            i + 1,
            t.name,
            t.title,
            t.rating,
            t.hourly_rate,
            t.availability.label(),
            t.skills.join(", ")
        );
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    let options = match &cli.options {
        Some(path) => EngineOptions::from_path(path)?.with_env_overrides(),
        None => EngineOptions::from_env(),
    };

    match cli.command {
        Commands::Recommend { filters, mode, query, top_n } => {
            let filters = filters.to_filter_state()?;
            let options = match top_n {
                Some(n) => options.with_top_n(n),
                None => options,
            };
            let engine = RecommendationEngine::with_options(catalog, options);

            if mode == DisplayMode::Best {
                let shown = engine.displayed(&filters, mode, &query);
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&shown)?);
                } else {
                    println!("📋 {} matching freelancer(s):", shown.len());
                    print_talents(&shown);
                }
                return Ok(());
            }

            let mut rec = engine.recommend(&filters);
            rec.candidates.retain(|t| talent_match_engine::filter::matches_query(t, &query));

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                println!("🔍 {}", rec.display());
                if let Some(strategy) = rec.strategy {
                    println!("   Strategy: {} ({})", strategy.label(), strategy.key());
                }
                for s in &rec.strategy_scores {
                    println!("   Score {:<28} {:.4}", s.strategy.label(), s.score);
                }
                println!("   Latency: {:.3}ms\n", rec.latency_ms);
                print_talents(&rec.candidates);
            }
        }

        Commands::Explain { filters } => {
            let filters = filters.to_filter_state()?;
            let strict = strict_filter(catalog.talents(), &filters);
            let results = Arbiter::default().evaluate(&strict, &filters, &mut rand::thread_rng());
            let breakdown = relaxed::score_all(catalog.talents(), &filters);

            if cli.json {
                let scores: Vec<_> = results.iter().map(|r| r.summary()).collect();
                let relaxed: Vec<_> = breakdown
                    .iter()
                    .map(|(t, s)| serde_json::json!({ "id": t.id, "name": t.name, "score": s, "total": s.total() }))
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "strict_matches": strict.len(),
                        "strategy_scores": scores,
                        "relaxed": relaxed,
                    }))?
                );
                return Ok(());
            }

            println!("📊 Strict matches: {}", strict.len());
            for r in &results {
                let head = r.candidates.first().map(|t| t.name.as_str()).unwrap_or("-");
                println!("   {:<28} score {:.4}  top: {}", r.strategy.label(), r.score, head);
            }

            println!("\n🧮 Relaxed-match scores:");
            let mut ordered = breakdown;
            ordered.sort_by(|a, b| {
                b.1.total()
                    .partial_cmp(&a.1.total())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            for (t, s) in ordered.iter().take(5) {
                println!(
                    "   {:<22} total {:>6.2}  (rating {:.1}, rate {:.1}, skills {:.1}, avail {:.0}, location {:.0})",
                    t.name, s.total(), s.rating, s.rate, s.skills, s.availability, s.location
                );
            }
        }

        Commands::Catalog => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(catalog.talents())?);
            } else {
                println!("📚 {} freelancer(s):", catalog.len());
                print_talents(catalog.talents());

                let availability: Vec<_> = Availability::ALL.iter().map(|a| a.label()).collect();
                println!("\n⚙️  Filter options:");
                println!("   Availability: {}", availability.join(", "));
                println!("   Languages:    {}", LANGUAGE_OPTIONS.join(", "));
                println!("   Locations:    {}", LOCATION_OPTIONS.join(", "));
                println!("   Skills:       {}", catalog.skills().join(", "));
                for category in SkillCategory::ALL {
                    println!("   {:<21} {}", category.label(), category.skills().join(", "));
                }
            }
        }
    }

    Ok(())
}
