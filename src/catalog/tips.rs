//! Advisor tip catalog.
//!
//! Order matters: tips of equal priority are returned in the order they
//! appear here.

use crate::advisor::{AdvisorTip, Condition, Exposure, PositionCheck, RelativeHeight, TipActionType, Trigger};
use crate::types::{ClimateType, Hemisphere, ZoneLevel};

const fn placed(element_type: &'static str) -> Trigger {
    Trigger::ElementPlaced { element_type }
}

const fn near(element_a: &'static str, element_b: &'static str, max_distance: f64) -> Trigger {
    Trigger::ElementNear { element_a, element_b, max_distance }
}

const fn positioned(element_type: &'static str, check: PositionCheck) -> Trigger {
    Trigger::ElementPosition { element_type, check }
}

const fn zone(zone_level: ZoneLevel) -> Trigger {
    Trigger::ZoneCreated { zone_level }
}

const fn wizard(step: &'static str) -> Trigger {
    Trigger::WizardStep { step }
}

pub static TIPS: &[AdvisorTip] = &[
    // ------------------------------------------------------------------
    // site analysis
    // ------------------------------------------------------------------
    AdvisorTip::new(
        "analysis-complete-summary",
        Trigger::AnalysisComplete,
        95,
        "Your land has character",
        "We analysed your site and found its climate zone, sun path, prevailing wind, and slope. \
         These natural patterns are the foundation of a good permaculture design: work with them, not against them.",
        "Review your site analysis before placing elements.",
    )
    .learn_more(
        "In permaculture, we call these factors \"sectors\": external energies that flow through your land. \
         Sun, wind, water runoff, and fire risk each come from a direction. Understanding sectors lets you place \
         elements to capture helpful energy and deflect harmful energy.",
    ),
    AdvisorTip::new(
        "analysis-arid",
        Trigger::AnalysisComplete,
        93,
        "Every drop counts",
        "Your site is arid. Design around water first: catch rain from every roof, slow runoff with swales and \
         basins, and cover bare soil with mulch to stop evaporation.",
        "Arid site: harvest and hold every drop of water.",
    )
    .climate(ClimateType::Arid)
    .learn_more(
        "In dry climates the soil itself is the biggest water tank you have. A 1% increase in soil organic matter \
         lets a hectare hold tens of thousands of extra litres. Mulch, compost, and shade are water infrastructure.",
    ),
    AdvisorTip::new(
        "analysis-tropical",
        Trigger::AnalysisComplete,
        93,
        "Growth is fast, and so is decay",
        "Your site is tropical. Plants grow quickly but heavy rain leaches nutrients fast, so keep the soil \
         covered and build fertility in living plants rather than bare beds.",
        "Tropical site: keep soil covered and layered.",
    )
    .climate(ClimateType::Tropical),
    AdvisorTip::new(
        "analysis-subtropical",
        Trigger::AnalysisComplete,
        93,
        "Two growing seasons",
        "Your site is subtropical. You can grow both warm-season and cool-season crops, so plan beds that \
         rotate through the year instead of lying fallow in winter.",
        "Subtropical site: plan for year-round planting.",
    )
    .climate(ClimateType::Subtropical),
    AdvisorTip::new(
        "analysis-temperate",
        Trigger::AnalysisComplete,
        93,
        "Make the most of the season",
        "Your site is temperate. The growing season is bounded by frost, so place tender crops where they \
         catch the most winter sun and shelter them from cold winds.",
        "Temperate site: extend the season with sun traps.",
    )
    .climate(ClimateType::Temperate),
    AdvisorTip::new(
        "analysis-sunny-slope",
        Trigger::AnalysisComplete,
        60,
        "Your slope faces the sun",
        "Your land tilts toward the equator. Slopes like this warm early in spring and hold heat late into \
         autumn, which suits fruit trees and heat-loving crops.",
        "Sun-facing slope: ideal for warmth-loving plants.",
    )
    .when(Condition::SunExposure { aspect: Exposure::Sunny }),
    AdvisorTip::new(
        "analysis-shaded-slope",
        Trigger::AnalysisComplete,
        60,
        "Your slope faces away from the sun",
        "Your land tilts away from the equator, so it stays cooler and moister. Favour shade-tolerant crops \
         and keep your sunniest corner for the vegetable garden.",
        "Pole-facing slope: cooler and moister than average.",
    )
    .when(Condition::SunExposure { aspect: Exposure::Shaded }),
    // ------------------------------------------------------------------
    // structures
    // ------------------------------------------------------------------
    AdvisorTip::new(
        "house-placed-zone0",
        placed("house"),
        90,
        "The house anchors everything",
        "In permaculture, the house is Zone 0: the centre of your design. Every other zone radiates outward \
         from it. Place the elements you use most often closest to the house, and let less-visited areas sit \
         further away.",
        "House = Zone 0. Place daily-use elements nearby.",
    )
    .learn_more(
        "Zone planning is based on the frequency of human interaction. Zone 0 is the house itself, Zone 1 is \
         visited multiple times a day (herbs, salad greens), and each subsequent zone sees less traffic. This \
         saves energy by minimising unnecessary walking.",
    ),
    AdvisorTip::new(
        "house-faces-south",
        placed("house"),
        72,
        "Open the house to the south",
        "In the northern hemisphere the winter sun sits low in the southern sky. Put living areas and large \
         windows on the south side and keep the north side for storage and entries.",
        "Living spaces and glazing face south.",
    )
    .hemisphere(Hemisphere::Northern),
    AdvisorTip::new(
        "house-faces-north",
        placed("house"),
        72,
        "Open the house to the north",
        "In the southern hemisphere the winter sun sits low in the northern sky. Put living areas and large \
         windows on the north side and keep the south side for storage and entries.",
        "Living spaces and glazing face north.",
    )
    .hemisphere(Hemisphere::Southern),
    AdvisorTip::new(
        "shed-access",
        placed("shed"),
        55,
        "Access matters",
        "A tool shed that is hard to reach gets ignored. Place it along a natural path between the house and \
         your main work areas so you pass it every day and can grab tools without a detour.",
        "Shed on a natural path between house and garden.",
    )
    .when(Condition::DistanceFromHouse { max_meters: 50.0 })
    .learn_more(
        "Observe your own movement patterns. After a week of living on the land, the \"desire paths\" where the \
         grass is worn down reveal the routes you actually walk. Place the shed on one of those routes so it \
         becomes a natural stop, not a chore to visit.",
    ),
    AdvisorTip::new(
        "shed-roof-catchment",
        placed("shed"),
        52,
        "Every roof is a catchment",
        "A shed roof can fill a small tank with every storm. Add a gutter and a barrel and you have water right \
         where the tools and seedlings are.",
        "Put a gutter and tank on the shed.",
    ),
    // ------------------------------------------------------------------
    // water
    // ------------------------------------------------------------------
    AdvisorTip::new(
        "water-tank-placed",
        placed("water-tank"),
        85,
        "Water flows downhill",
        "Place your water tank at the highest practical point on your land. Gravity will push water to your \
         gardens, orchard, and animals without a pump, saving energy and money.",
        "Tank uphill = free irrigation pressure.",
    )
    .learn_more(
        "A 1-metre height difference gives roughly 0.1 bar (1.5 psi) of water pressure. A tank 10 metres above \
         your garden delivers enough pressure for drip irrigation without any electricity. This is the \
         permaculture principle of \"catch and store energy\" at work.",
    )
    .action("Move tank uphill", TipActionType::MoveElementUphill),
    AdvisorTip::new(
        "water-tank-arid",
        placed("water-tank"),
        80,
        "Size for the dry season",
        "In an arid climate the tank has to carry you through months without rain. Work out your dry-season \
         demand and size storage for it, then shade the tank to keep the water cool.",
        "Arid site: size tanks for the longest dry spell.",
    )
    .climate(ClimateType::Arid),
    AdvisorTip::new(
        "tank-near-garden",
        near("water-tank", "garden-bed", 30.0),
        82,
        "Gravity-fed irrigation",
        "Your water tank is close to a garden bed and positioned uphill: perfect for gravity-fed drip \
         irrigation. Connect a hose or pipe and let gravity do the work, no pump needed.",
        "Tank above garden = free drip irrigation.",
    )
    .when(Condition::ElevationCompare {
        element_a: "water-tank",
        element_b: "garden-bed",
        expected: RelativeHeight::Higher,
    })
    .learn_more(
        "Gravity-fed drip systems are the most water-efficient irrigation method available to home growers. \
         They deliver water directly to the root zone with minimal evaporation. Because there are no moving \
         parts, maintenance is limited to occasional filter cleaning.",
    ),
    AdvisorTip::new(
        "tank-below-garden",
        near("water-tank", "garden-bed", 30.0),
        78,
        "You will need a pump",
        "Your water tank sits below the garden bed it is meant to serve. Either move the tank uphill or plan \
         for a pump to lift the water.",
        "Tank below garden = pumping required.",
    )
    .when(Condition::ElevationCompare {
        element_a: "water-tank",
        element_b: "garden-bed",
        expected: RelativeHeight::Lower,
    })
    .action("Move tank uphill", TipActionType::MoveElementUphill),
    AdvisorTip::new(
        "tank-uphill-good",
        positioned("water-tank", PositionCheck::Uphill),
        50,
        "Good water placement",
        "Your water tank is at a high point on the property. Water stored at elevation is potential energy you \
         can tap with nothing more than a hose. This is one of the most valuable placements in a permaculture \
         design.",
        "Tank is well placed at a high point.",
    )
    .learn_more(
        "Bill Mollison, the co-founder of permaculture, called water stored at height \"liquid gold.\" Every \
         metre of elevation gives you free pressure. Combined with a rainwater catchment roof, a hilltop tank \
         can supply a household and garden with zero energy input beyond rainfall.",
    ),
    // ------------------------------------------------------------------
    // zones
    // ------------------------------------------------------------------
    AdvisorTip::new(
        "zone1-created",
        zone(ZoneLevel::DAILY),
        80,
        "Zone 1 is your daily orbit",
        "This is the area you walk through multiple times a day. Fill it with herbs, salad greens, a \
         clothesline, and anything you harvest or check on daily. Keep it within a few steps of the back door.",
        "Herbs, salad, and daily harvests go in Zone 1.",
    )
    .learn_more(
        "Zone 1 typically extends 5-15 metres from the house. Because you visit it so often, it gets the most \
         attention and maintenance. High-yield, quick-harvest crops thrive here because you will notice pests \
         early and water reliably.",
    ),
    AdvisorTip::new(
        "zone2-created",
        zone(ZoneLevel::FREQUENT),
        75,
        "Zone 2 feeds the family",
        "Zone 2 is where the bulk of your food comes from: fruit trees, larger vegetable beds, chicken runs, and \
         berry bushes. It needs regular but not daily attention.",
        "Orchard, poultry, and staple crops belong in Zone 2.",
    )
    .learn_more(
        "A well-planned Zone 2 can provide a household with most of its fruit, eggs, and seasonal vegetables. \
         Group plants with similar water needs together and place the chicken coop where the birds can forage \
         under fruit trees. They eat fallen fruit and fertilise the soil.",
    ),
    AdvisorTip::new(
        "zone3-created",
        zone(ZoneLevel::OCCASIONAL),
        70,
        "Zone 3 is the farm",
        "Zone 3 holds the crops and animals you visit weekly at most: main-crop grains, pasture, nut trees, and \
         larger food forest plantings. Choose hardy, self-reliant species here.",
        "Hardy main crops and pasture in Zone 3.",
    ),
    AdvisorTip::new(
        "zone4-created",
        zone(ZoneLevel::MINIMAL),
        65,
        "Zone 4 is semi-wild",
        "Zone 4 is managed lightly: timber, forage, windbreaks, and wild food. Plant it once with long-lived \
         species and let it largely look after itself.",
        "Timber, windbreaks, and forage in Zone 4.",
    ),
    // ------------------------------------------------------------------
    // planting
    // ------------------------------------------------------------------
    AdvisorTip::new(
        "garden-bed-sun",
        placed("garden-bed"),
        70,
        "Sun chases your garden beds",
        "Orient your garden beds so the long axis runs east-west. This gives each row maximum exposure as the \
         sun crosses the sky, and prevents taller plants from shading shorter ones.",
        "Long axis east-west for maximum sun.",
    )
    .learn_more(
        "In the northern hemisphere the sun tracks across the southern sky, so beds running east-west let light \
         reach every row from the south. In the southern hemisphere the sun is in the northern sky and the same \
         principle applies in reverse. Raised beds angled slightly toward the sun warm up faster in spring.",
    )
    .action("Rotate to face the sun", TipActionType::RotateElementToSun),
    AdvisorTip::new(
        "garden-bed-shaded-site",
        positioned("garden-bed", PositionCheck::Sunny),
        64,
        "Find the light",
        "Your site faces away from the sun, so vegetables will struggle in the wrong spot. Put this bed in the \
         sunniest, most open part of the land and keep tall trees on its pole-facing side.",
        "Shaded site: give vegetable beds the sunniest spot.",
    )
    .when(Condition::SunExposure { aspect: Exposure::Shaded }),
    AdvisorTip::new(
        "garden-bed-near-house",
        placed("garden-bed"),
        62,
        "Close to the kitchen",
        "This bed is within easy reach of the house. Beds you pass every day get watered, weeded, and harvested \
         on time. Fill it with the crops you pick most often.",
        "Near beds get the best care.",
    )
    .when(Condition::DistanceFromHouse { max_meters: 25.0 }),
    AdvisorTip::new(
        "fruit-tree-layers",
        placed("fruit-tree"),
        68,
        "Think in 3D layers",
        "A single fruit tree can anchor a whole food forest guild. Underneath the canopy you can plant shrubs, \
         herbs, groundcovers, and root crops: seven layers of food production in the space of one tree.",
        "Plant guilds under fruit trees for stacked yields.",
    )
    .learn_more(
        "The seven layers of a food forest are canopy (large trees), understorey (small trees), shrub, \
         herbaceous, groundcover, root/tuber, and vine/climber. Each layer captures light that would otherwise \
         be wasted. Start with the tree and add lower layers as it matures.",
    ),
    AdvisorTip::new(
        "fruit-tree-tropical",
        placed("fruit-tree"),
        66,
        "Plant for succession",
        "In the tropics, fast support species such as bananas and legumes can shelter a young fruit tree and \
         feed it with their prunings. Chop and drop them as the tree grows.",
        "Support young trees with chop-and-drop plants.",
    )
    .climate(ClimateType::Tropical),
    AdvisorTip::new(
        "fruit-tree-arid",
        placed("fruit-tree"),
        66,
        "Plant in a basin",
        "In a dry climate, set each tree in a shallow basin or on the downhill lip of a swale so every shower \
         soaks in around the roots. Mulch thickly and shade the trunk while it establishes.",
        "Basin-plant and mulch trees in dry country.",
    )
    .climate(ClimateType::Arid),
    AdvisorTip::new(
        "fruit-tree-sun-wall-north",
        positioned("fruit-tree", PositionCheck::Sunny),
        54,
        "Borrow heat from a wall",
        "Frost-tender fruit does best against a south-facing wall or fence. The masonry soaks up heat by day and \
         releases it at night, adding weeks to the season.",
        "Tender fruit against a south-facing wall.",
    )
    .climate(ClimateType::Temperate)
    .hemisphere(Hemisphere::Northern),
    AdvisorTip::new(
        "fruit-tree-sun-wall-south",
        positioned("fruit-tree", PositionCheck::Sunny),
        54,
        "Borrow heat from a wall",
        "Frost-tender fruit does best against a north-facing wall or fence. The masonry soaks up heat by day and \
         releases it at night, adding weeks to the season.",
        "Tender fruit against a north-facing wall.",
    )
    .climate(ClimateType::Temperate)
    .hemisphere(Hemisphere::Southern),
    // ------------------------------------------------------------------
    // animals and nutrient cycling
    // ------------------------------------------------------------------
    AdvisorTip::new(
        "chicken-coop-integration",
        placed("chicken-coop"),
        65,
        "Chickens are workers",
        "Place the chicken coop between the compost area and the garden beds. Chickens turn kitchen scraps into \
         fertiliser, eat pest insects, and scratch mulch into the soil: three jobs in one animal.",
        "Coop near compost and garden for maximum benefit.",
    )
    .learn_more(
        "In a \"chicken tractor\" system the birds are rotated through garden beds after harvest. They clear \
         crop residue, eat weed seeds, add manure, and scratch the surface, preparing the bed for the next \
         planting with almost no human labour.",
    ),
    AdvisorTip::new(
        "chicken-coop-tropical",
        placed("chicken-coop"),
        63,
        "Keep the flock cool",
        "Heat stresses chickens more than cold. Site the coop under trees or on the shaded side of a building \
         and leave plenty of ventilation.",
        "Shade and airflow for tropical coops.",
    )
    .climate(ClimateType::Tropical),
    AdvisorTip::new(
        "compost-loop",
        placed("compost"),
        60,
        "Close the loop",
        "Place the compost between the kitchen door and your garden beds. Kitchen scraps go in on the way out, \
         finished compost goes on the beds on the way back. Short distances make the habit stick.",
        "Compost between kitchen and garden.",
    )
    .when(Condition::DistanceFromHouse { max_meters: 30.0 })
    .learn_more(
        "A well-managed compost system processes kitchen and garden waste in 8-12 weeks. The resulting humus \
         feeds soil biology, retains moisture, and slowly releases nutrients. Placing it close to both source \
         (kitchen) and destination (garden) removes the friction that makes people stop composting.",
    ),
    AdvisorTip::new(
        "compost-near-coop",
        near("compost", "chicken-coop", 15.0),
        58,
        "Let the chickens turn it",
        "Your compost is next to the chicken coop. Give the birds access and they will turn the heap, eat the \
         grubs, and add manure, so you rarely need a fork.",
        "Chickens beside compost do the turning.",
    ),
    AdvisorTip::new(
        "coop-near-garden",
        near("chicken-coop", "garden-bed", 20.0),
        57,
        "Gate the run into the garden",
        "The coop is close to a garden bed. A gate between the run and the beds lets you send the flock in to \
         clean up after harvest and keep them out while crops grow.",
        "Coop by the garden: add a gate, not a free-for-all.",
    ),
    // ------------------------------------------------------------------
    // paths
    // ------------------------------------------------------------------
    AdvisorTip::new(
        "path-connectivity",
        placed("path"),
        45,
        "Connect the dots",
        "Paths link the places you visit most: house to garden, garden to compost, compost to chicken coop. \
         Good paths reduce mud, save time, and make the property pleasant to walk through in any weather.",
        "Link house, garden, compost, and coop with paths.",
    )
    .learn_more(
        "In permaculture, paths double as design elements. A gravel path acts as a firebreak, a mulched path \
         suppresses weeds and slowly adds organic matter to adjacent beds, and a keyhole path maximises garden \
         bed area while minimising walkway space.",
    ),
    AdvisorTip::new(
        "path-arid-swale",
        placed("path"),
        44,
        "Paths can harvest water",
        "On dry land, run paths along the contour and dig a shallow swale beside them. Rain that runs off the \
         hard path soaks into the swale instead of leaving the site.",
        "Contour paths with swales catch runoff.",
    )
    .climate(ClimateType::Arid),
    // ------------------------------------------------------------------
    // design review
    // ------------------------------------------------------------------
    AdvisorTip::new(
        "design-review-sectors",
        Trigger::DesignReview,
        88,
        "Sector analysis",
        "Before finalising your layout, check that you have accounted for the major sectors: sun path, \
         prevailing wind, water flow, and any fire or noise corridors. Each sector is an energy flowing through \
         your site that your design should harness or buffer.",
        "Check sun, wind, water, and fire sectors.",
    )
    .learn_more(
        "Draw lines on your map for each sector. The sun sector sweeps from east to west (via south in the \
         northern hemisphere, via north in the southern). The wind sector shows your prevailing wind direction. \
         Water runs downhill along the slope. Place windbreaks against cold winds, open views toward winter sun, \
         and keep fire-prone vegetation away from structures.",
    ),
    AdvisorTip::new(
        "design-review-water",
        Trigger::DesignReview,
        86,
        "Follow the water",
        "Trace where rain lands and where it leaves your site. Every element that catches, stores, or slows \
         water on the way through makes the whole design more resilient.",
        "Catch, store, and slow water before it leaves.",
    ),
    AdvisorTip::new(
        "design-review-zones",
        Trigger::DesignReview,
        84,
        "Check your zones",
        "Walk through your design zone by zone. Anything you visit daily should sit in Zone 1 or 2; anything in \
         Zone 3 or beyond should survive a fortnight without you.",
        "Daily elements close, self-reliant elements far.",
    ),
    // ------------------------------------------------------------------
    // setup wizard
    // ------------------------------------------------------------------
    AdvisorTip::new(
        "wizard-location",
        wizard("location"),
        92,
        "Start with where you are",
        "Your location sets the climate, the sun angles, and the season lengths that every later suggestion \
         depends on. Search for your address or drop a pin on the property.",
        "Location drives climate and sun analysis.",
    ),
    AdvisorTip::new(
        "wizard-boundary",
        wizard("boundary"),
        92,
        "Every boundary is unique",
        "The shape of your boundary affects where zones fall, how water runs, and how sunlight reaches \
         different corners. Trace it carefully: an accurate boundary means better analysis and more useful \
         tips later.",
        "Accurate boundary = better design recommendations.",
    )
    .learn_more(
        "An irregularly shaped block can be an advantage. Narrow corridors make great windbreaks, odd corners \
         become micro-climates for tender plants, and longer boundaries mean more \"edge\", the most productive \
         zone in any ecosystem.",
    ),
    AdvisorTip::new(
        "wizard-house",
        wizard("house"),
        90,
        "Mark the house first",
        "Zones are measured from the house, so placing it is the step that turns your boundary into a design. \
         If you have not built yet, mark where you expect the main door to be.",
        "Zones radiate from the house.",
    ),
];

/// Look up a tip by id.
pub fn tip(id: &str) -> Option<&'static AdvisorTip> {
    TIPS.iter().find(|t| t.id == id)
}
