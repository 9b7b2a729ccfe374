use shared_types::AppDescriptor;

pub fn core_apps() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor {
            id: "pet".to_string(),
            title: "디지털 펫".to_string(),
            icon: "/assets/icons/pet.png".to_string(),
        },
        AppDescriptor {
            id: "paint".to_string(),
            title: "그림판".to_string(),
            icon: "/assets/icons/paint.png".to_string(),
        },
        AppDescriptor {
            id: "piano".to_string(),
            title: "피아노".to_string(),
            icon: "/assets/icons/piano.png".to_string(),
        },
        AppDescriptor {
            id: "cards".to_string(),
            title: "카드 짝맞추기".to_string(),
            icon: "/assets/icons/cards.png".to_string(),
        },
        AppDescriptor {
            id: "dino".to_string(),
            title: "공룡게임".to_string(),
            icon: "/assets/icons/dino.png".to_string(),
        },
    ]
}

/// Apps pinned to the taskbar, in registry order
pub fn quick_launch_apps(apps: &[AppDescriptor], count: usize) -> Vec<AppDescriptor> {
    apps.iter().take(count).cloned().collect()
}
