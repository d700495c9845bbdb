use std::path::PathBuf;

/// Permaculture site-design CLI.  Results go to stdout as JSON, progress to stderr.
#[derive(clap::Parser, Debug)]
#[command(name = "comfrey", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON config file (zone radii, service endpoints)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Check a boundary polygon and report its area
    Validate(ValidateArgs),

    /// Generate zones 0-4 around a house, as GeoJSON
    Zones(ZonesArgs),

    /// Create a project file from a boundary
    New(NewArgs),

    /// Place an element in a project and show the advice it triggers
    Place(PlaceArgs),

    /// Run the advisor for a design event
    Advise(AdviseArgs),

    /// Derive the phased action plan for a design
    Plan(ProjectArgs),

    /// Check companion planting, or suggest a guild
    Companions(CompanionsArgs),

    /// Classify a climate from temperature and rainfall figures
    Climate(ClimateArgs),

    /// Sun altitude, azimuth and day length at the solstices and equinox
    Sun(SunArgs),

    /// Fetch climate and terrain for a location and build a site analysis
    #[cfg(feature = "download")]
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// GeoJSON Polygon, Feature or FeatureCollection
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundary: PathBuf,

    /// Report area in acres / square feet
    #[arg(long)]
    pub imperial: bool,
}

#[derive(clap::Args, Debug)]
pub struct ZonesArgs {
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundary: PathBuf,

    /// House position, "lng,lat"
    #[arg(long, allow_hyphen_values = true)]
    pub house: String,

    /// Property area in square metres, defaults to the measured boundary area
    #[arg(long)]
    pub area: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundary: PathBuf,

    /// Project name
    #[arg(long)]
    pub name: String,

    /// Site location, "lng,lat", defaults to the boundary's centre
    #[arg(long, allow_hyphen_values = true)]
    pub location: Option<String>,

    /// Site analysis JSON to attach (as produced by `analyze`)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub analysis: Option<PathBuf>,

    /// Output project file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ProjectArgs {
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub project: PathBuf,

    /// Design id, defaults to the first design
    #[arg(long)]
    pub design: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct PlaceArgs {
    #[command(flatten)]
    pub target: ProjectArgs,

    /// Element type id, e.g. water-tank or plant:comfrey
    pub element_type: String,

    /// Position, "lng,lat"
    #[arg(allow_hyphen_values = true)]
    pub position: String,

    #[arg(long)]
    pub label: Option<String>,
}

#[derive(clap::Args, Debug)]
#[command(group(clap::ArgGroup::new("event").required(true)))]
pub struct AdviseArgs {
    #[command(flatten)]
    pub target: ProjectArgs,

    /// An element was placed
    #[arg(long, group = "event", value_name = "ELEMENT_ID")]
    pub placed: Option<String>,

    /// An element was moved (requires --from)
    #[arg(long, group = "event", value_name = "ELEMENT_ID", requires = "from")]
    pub moved: Option<String>,

    /// Previous position of a moved element, "lng,lat"
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<String>,

    /// An element was deleted
    #[arg(long, group = "event", value_name = "ELEMENT_ID")]
    pub deleted: Option<String>,

    /// A zone was created
    #[arg(long, group = "event", value_name = "LEVEL")]
    pub zone: Option<u8>,

    /// Site analysis finished
    #[arg(long, group = "event")]
    pub analysis: bool,

    /// The setup wizard entered a step
    #[arg(long, group = "event", value_name = "STEP")]
    pub wizard_step: Option<String>,

    /// Whole-design review
    #[arg(long, group = "event")]
    pub review: bool,

    /// Record the returned tips as seen in the project file
    #[arg(long)]
    pub mark_seen: bool,
}

#[derive(clap::Args, Debug)]
pub struct CompanionsArgs {
    #[command(flatten)]
    pub target: ProjectArgs,

    /// Suggest a guild around this plant id instead of checking the design
    #[arg(long)]
    pub guild: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ClimateArgs {
    /// Mean temperature of the coldest month, Celsius
    #[arg(long, allow_hyphen_values = true)]
    pub coldest: f64,

    /// Mean temperature of the warmest month, Celsius
    #[arg(long, allow_hyphen_values = true)]
    pub warmest: f64,

    /// Annual rainfall, millimetres
    #[arg(long)]
    pub rainfall: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
}

#[derive(clap::Args, Debug)]
pub struct SunArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Reference year, defaults to 2026
    #[arg(long, default_value_t = 2026)]
    pub year: i32,
}

#[cfg(feature = "download")]
#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Also write the analysis to this file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
