//! Logique de l'écran vitrine qui entoure le champ de particules :
//! effet de défilement de l'en-tête, dégradé animé du fond et actions des boutons.
//!
//! Rien ici ne dépend d'un toolkit graphique : l'hôte applique les états et
//! effets retournés.

pub mod scroll;
pub use self::scroll::{HeaderState, ScrollEffect};

pub mod gradient;
pub use self::gradient::{GradientFrame, HeroGradient};

pub mod actions;
pub use self::actions::{NoticeDuration, ShowcaseAction, UiEffect};

pub mod config;
pub use self::config::ShowcaseConfig;
