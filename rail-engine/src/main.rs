use rail_engine::{bootstrap, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let engine = bootstrap(&config).await?;

    for train in engine.catalog.all_trains() {
        let route = match engine.catalog.get_route(train.route_id) {
            Some(route) => route,
            None => continue,
        };
        for station in &route.stations {
            tracing::info!(train = %train.number, "{} ({})", station.name, station.time_info());
        }
        let (first, last) = match (route.stations.first(), route.stations.last()) {
            (Some(first), Some(last)) => (first.id, last.id),
            _ => continue,
        };

        let segments = engine.orchestrator.get_segments_between(train.number, first, last).await?;
        for date in &config.catalog.dates {
            if let Some(summary) = engine
                .orchestrator
                .get_availability(train.number, *date, first, last)
                .await?
            {
                tracing::info!(
                    train = %train.number,
                    date = %date,
                    confirmed = summary.confirmed,
                    rac = summary.rac,
                    waiting = summary.waiting,
                    "{} availability",
                    train.name
                );
            }
            for segment in &segments {
                if let Some(free) = engine
                    .orchestrator
                    .get_availability(train.number, *date, segment.from, segment.to)
                    .await?
                {
                    tracing::debug!(train = %train.number, date = %date, confirmed = free.confirmed, "{}", segment.label(&route));
                }
            }
        }
    }

    Ok(())
}
