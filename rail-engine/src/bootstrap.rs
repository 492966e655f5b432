use anyhow::{anyhow, Context};
use rail_booking::BookingOrchestrator;
use rail_core::{Catalog, InMemoryCatalog, RouteId, TierCapacity, Train, TrainNumber};
use std::collections::HashMap;
use std::sync::Arc;

use crate::app_config::{CatalogConfig, Config};

/// A ready-to-use booking engine over a seeded in-memory catalog
pub struct Engine {
    pub catalog: Arc<InMemoryCatalog>,
    pub orchestrator: BookingOrchestrator,
}

/// Register configured routes and trains. Returns the route ids by configured name.
pub fn seed_catalog(catalog: &InMemoryCatalog, config: &CatalogConfig) -> anyhow::Result<HashMap<String, RouteId>> {
    let mut routes = HashMap::new();
    for route in &config.routes {
        let id = catalog
            .add_route(route.stops.clone())
            .with_context(|| format!("route '{}'", route.name))?;
        routes.insert(route.name.clone(), id);
    }

    for train in &config.trains {
        let route_id = *routes
            .get(&train.route)
            .ok_or_else(|| anyhow!("train {} refers to unknown route '{}'", train.number, train.route))?;
        catalog
            .add_train(Train {
                number: TrainNumber(train.number),
                name: train.name.clone(),
                route_id,
                capacity: TierCapacity::new(train.confirmed, train.rac, train.waiting),
            })
            .with_context(|| format!("train {}", train.number))?;
    }

    tracing::info!(routes = routes.len(), trains = config.trains.len(), "Catalog seeded");
    Ok(routes)
}

/// Build the catalog and orchestrator, then set up inventory for every configured date
pub async fn bootstrap(config: &Config) -> anyhow::Result<Engine> {
    let catalog = Arc::new(InMemoryCatalog::new());
    seed_catalog(&catalog, &config.catalog)?;

    let shared: Arc<dyn Catalog> = catalog.clone();
    let orchestrator = BookingOrchestrator::new(shared, config.engine.event_buffer);

    for date in &config.catalog.dates {
        for train in catalog.all_trains() {
            orchestrator
                .initialize_inventory(train.number, *date, train.route_id, train.capacity)
                .await
                .with_context(|| format!("inventory for train {} on {}", train.number, date))?;
        }
    }

    Ok(Engine { catalog, orchestrator })
}
