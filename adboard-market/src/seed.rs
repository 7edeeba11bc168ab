use adboard_domain::{Billboard, Coordinates};
use uuid::Uuid;

/// Demonstration listings inserted on first run.
pub fn demo_billboards() -> Vec<Billboard> {
    vec![
        Billboard {
            id: Uuid::new_v4(),
            owner_id: "seed-owner-1".to_string(),
            title: "Downtown Mega Board".to_string(),
            description: "High-traffic intersection visibility".to_string(),
            price: 1200.0,
            size: "14x48 ft".to_string(),
            location: Coordinates::new(40.7484, -73.9857),
            address: "Empire State Bldg Area, NYC".to_string(),
            active: true,
        },
        Billboard {
            id: Uuid::new_v4(),
            owner_id: "seed-owner-2".to_string(),
            title: "Riverside Display".to_string(),
            description: "Near popular park and mall".to_string(),
            price: 800.0,
            size: "10x30 ft".to_string(),
            location: Coordinates::new(34.0522, -118.2437),
            address: "Los Angeles Downtown".to_string(),
            active: true,
        },
        Billboard {
            id: Uuid::new_v4(),
            owner_id: "seed-owner-1".to_string(),
            title: "Airport Expressway".to_string(),
            description: "Commuter route exposure".to_string(),
            price: 1500.0,
            size: "20x60 ft".to_string(),
            location: Coordinates::new(51.47, -0.4543),
            address: "Heathrow Area, London".to_string(),
            active: true,
        },
    ]
}
