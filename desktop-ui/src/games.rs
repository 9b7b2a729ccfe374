//! Window content for each mini-game.
//!
//! The games are placeholders: every block is static markup picked by app id.
//! Unknown ids fall back to a generic notice instead of failing.

use dioxus::prelude::*;

pub const FALLBACK_TEXT: &str = "알 수 없는 앱";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Pet,
    Paint,
    Piano,
    Cards,
    Dino,
}

impl GameKind {
    pub fn from_app_id(app_id: &str) -> Option<Self> {
        match app_id {
            "pet" => Some(Self::Pet),
            "paint" => Some(Self::Paint),
            "piano" => Some(Self::Piano),
            "cards" => Some(Self::Cards),
            "dino" => Some(Self::Dino),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderBody {
    /// Inert action buttons (label, background color)
    Buttons(Vec<(&'static str, &'static str)>),
    Canvas {
        label: &'static str,
        min_height_px: u32,
    },
    Keys(usize),
    CardGrid {
        columns: usize,
        cards: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePlaceholder {
    pub heading: &'static str,
    pub description: &'static str,
    pub body: PlaceholderBody,
}

pub fn placeholder_for(app_id: &str) -> Option<GamePlaceholder> {
    let placeholder = match GameKind::from_app_id(app_id)? {
        GameKind::Pet => GamePlaceholder {
            heading: "디지털 펫 (초기 버전)",
            description: "먹이주기와 놀아주기 버튼이 있는 간단한 상호작용 자리입니다. 추후 상태 저장(localStorage)과 애니메이션 추가 예정.",
            body: PlaceholderBody::Buttons(vec![("먹이주기", "#3b82f6"), ("놀아주기", "#22c55e")]),
        },
        GameKind::Paint => GamePlaceholder {
            heading: "그림판",
            description: "캔버스와 브러시 크기/색상 컨트롤이 들어갈 자리입니다. 사용자는 업로드가 아닌 미리 정해진 이미지를 불러와 작업합니다.",
            body: PlaceholderBody::Canvas {
                label: "Canvas Placeholder",
                min_height_px: 200,
            },
        },
        GameKind::Piano => GamePlaceholder {
            heading: "피아노",
            description: "키를 클릭하면 소리가 납니다. 간단한 시퀀스 녹음/재생 기능 예정.",
            body: PlaceholderBody::Keys(7),
        },
        GameKind::Cards => GamePlaceholder {
            heading: "카드 짝맞추기",
            description: "4x4 그리드로 카드 뒤집기 로직이 들어갑니다. 정해진 이미지 세트로 플레이합니다.",
            body: PlaceholderBody::CardGrid {
                columns: 4,
                cards: 16,
            },
        },
        GameKind::Dino => GamePlaceholder {
            heading: "공룡게임",
            description: "런닝 게임 플레이어와 점프/장애물 로직 자리입니다. 간단한 키보드 이벤트로 조작합니다.",
            body: PlaceholderBody::Canvas {
                label: "Game Canvas Placeholder",
                min_height_px: 120,
            },
        },
    };
    Some(placeholder)
}

#[component]
pub fn GameContent(app_id: String) -> Element {
    let Some(placeholder) = placeholder_for(&app_id) else {
        return rsx! {
            div { class: "game-fallback", "{FALLBACK_TEXT}" }
        };
    };

    rsx! {
        div {
            class: "game-placeholder",
            h3 { style: "font-size: 1.125rem; font-weight: 700; margin: 0;", "{placeholder.heading}" }
            p { style: "margin-top: 0.5rem;", "{placeholder.description}" }
            PlaceholderBodyView { body: placeholder.body }
        }
    }
}

#[component]
fn PlaceholderBodyView(body: PlaceholderBody) -> Element {
    match body {
        PlaceholderBody::Buttons(buttons) => rsx! {
            div {
                style: "margin-top: 1rem; display: flex; gap: 0.75rem;",
                for (label, color) in buttons {
                    button {
                        style: "padding: 0.25rem 0.75rem; border: none; border-radius: 4px; color: white; background: {color};",
                        "{label}"
                    }
                }
            }
        },
        PlaceholderBody::Canvas {
            label,
            min_height_px,
        } => rsx! {
            div {
                style: "margin-top: 1rem; border: 1px solid #cbd5e1; border-radius: 4px; padding: 0.5rem; min-height: {min_height_px}px; display: flex; align-items: center; justify-content: center;",
                "{label}"
            }
        },
        PlaceholderBody::Keys(count) => rsx! {
            div {
                style: "margin-top: 1rem; display: flex; gap: 0.5rem;",
                for i in 0..count {
                    div {
                        key: "{i}",
                        style: "width: 2.5rem; height: 6rem; border: 1px solid #94a3b8;",
                        "Key"
                    }
                }
            }
        },
        PlaceholderBody::CardGrid { columns, cards } => rsx! {
            div {
                style: "margin-top: 1rem; display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 0.5rem;",
                for i in 0..cards {
                    div {
                        key: "{i}",
                        style: "height: 5rem; background: #e2e8f0; border-radius: 4px; display: flex; align-items: center; justify-content: center;",
                        "Card"
                    }
                }
            }
        },
    }
}
