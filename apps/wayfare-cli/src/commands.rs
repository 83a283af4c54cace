//! Command handlers.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use wayfare_core::domain::{
    Airport, CabinClass, Passengers, SearchPayload, TripType, filter_airports,
};
use wayfare_core::stores::{AuthState, SearchStore};

use crate::state::AppState;

/// Search form input, as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub round_trip: bool,
    pub depart: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub passengers: Passengers,
    pub class: CabinClass,
    pub promo: Option<String>,
    pub airline_only: bool,
    pub swap: bool,
}

pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let auth = state.auth.state().await;
    print_auth(&auth, json)
}

pub async fn login(state: &AppState, json: bool) -> Result<()> {
    state.auth.login().await.context("login failed")?;
    print_auth(&state.auth.state().await, json)
}

pub async fn logout(state: &AppState, json: bool) -> Result<()> {
    if !state.auth.is_logged_in().await {
        tracing::info!("Not signed in; signing out anyway");
    }
    state.auth.logout().await.context("logout failed")?;
    print_auth(&state.auth.state().await, json)
}

pub async fn airports(state: &AppState, query: Option<&str>, json: bool) -> Result<()> {
    let all = state
        .airports
        .airports()
        .await
        .context("airport lookup failed")?;
    let hits = filter_airports(&all, query.unwrap_or_default());

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if hits.is_empty() {
        println!("No airports match");
    } else {
        for a in hits {
            println!("{}  {} ({}, {})", a.code, a.name, a.city, a.country);
        }
    }
    Ok(())
}

pub async fn search(state: &AppState, args: &SearchArgs) -> Result<()> {
    let all = state
        .airports
        .airports()
        .await
        .context("airport lookup failed")?;
    let payload = build_search(&all, args)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

/// Drive a fresh search store the way the search widget would.
pub fn build_search(airports: &[Airport], args: &SearchArgs) -> Result<SearchPayload> {
    let mut store = SearchStore::new();

    store.set_trip_type(if args.round_trip {
        TripType::RoundTrip
    } else {
        TripType::OneWay
    });
    store.set_from(resolve(airports, args.from.as_deref())?);
    store.set_to(resolve(airports, args.to.as_deref())?);
    store.set_depart_date(args.depart);
    store.set_return_date(args.return_date);
    store.set_passengers(args.passengers);
    store.set_class(args.class);
    if let Some(code) = &args.promo {
        store.set_promo_code(code.as_str());
    }
    store.set_airline_only(args.airline_only);
    if args.swap {
        store.swap_locations();
    }

    Ok(store.search_payload())
}

fn resolve(airports: &[Airport], code: Option<&str>) -> Result<Option<Airport>> {
    let Some(code) = code else {
        return Ok(None);
    };
    match airports.iter().find(|a| a.code.eq_ignore_ascii_case(code)) {
        Some(airport) => Ok(Some(airport.clone())),
        None => bail!("unknown airport code: {code}"),
    }
}

fn print_auth(auth: &AuthState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(auth)?);
        return Ok(());
    }

    match &auth.user {
        Some(user) if auth.is_logged_in => {
            println!("Signed in as {} <{}> (id {})", user.name, user.email, user.id)
        }
        _ => println!("Signed out"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use wayfare_core::ports::AirportSource;
    use wayfare_infra::{InMemoryStore, MockAuthConfig, MockAuthService, StaticAirportSource};

    use super::*;

    async fn directory() -> Vec<Airport> {
        StaticAirportSource::new(Duration::ZERO)
            .airports()
            .await
            .unwrap()
    }

    fn test_state() -> AppState {
        AppState::from_parts(
            Arc::new(MockAuthService::new(MockAuthConfig {
                login_delay: Duration::ZERO,
                logout_delay: Duration::ZERO,
            })),
            Arc::new(InMemoryStore::new()),
            Arc::new(StaticAirportSource::new(Duration::ZERO)),
        )
    }

    #[tokio::test]
    async fn test_build_round_trip_search() {
        let airports = directory().await;
        let args = SearchArgs {
            from: Some("kul".to_string()),
            to: Some("SIN".to_string()),
            round_trip: true,
            passengers: Passengers::new(2, 1, 0),
            class: CabinClass::Business,
            ..Default::default()
        };

        let payload = build_search(&airports, &args).unwrap();

        assert_eq!(payload.trip_type, TripType::RoundTrip);
        assert_eq!(payload.from.unwrap().code, "KUL");
        assert_eq!(payload.to.unwrap().code, "SIN");
        assert_eq!(payload.passengers, Passengers::new(2, 1, 0));
        assert_eq!(payload.cabin_class, CabinClass::Business);
        assert_eq!(payload.depart_date, None);
        assert!(payload.promo_code.is_empty());
    }

    #[tokio::test]
    async fn test_build_search_with_swap() {
        let airports = directory().await;
        let args = SearchArgs {
            from: Some("BKK".to_string()),
            swap: true,
            ..Default::default()
        };

        let payload = build_search(&airports, &args).unwrap();

        assert!(payload.from.is_none());
        assert_eq!(payload.to.unwrap().code, "BKK");
    }

    #[tokio::test]
    async fn test_unknown_airport_code() {
        let airports = directory().await;
        let args = SearchArgs {
            from: Some("XXX".to_string()),
            ..Default::default()
        };

        let err = build_search(&airports, &args).unwrap_err();
        assert!(err.to_string().contains("XXX"));
    }

    #[tokio::test]
    async fn test_login_then_logout_commands() {
        let state = test_state();

        login(&state, true).await.unwrap();
        assert!(state.auth.is_logged_in().await);

        logout(&state, true).await.unwrap();
        assert!(!state.auth.is_logged_in().await);
    }
}
