use crate::ui::mvi::Reducer;
use crate::ui::overlay::intent::OverlayIntent;
use crate::ui::overlay::state::OverlayState;

pub struct OverlayReducer;

impl Reducer for OverlayReducer {
    type State = OverlayState;
    type Intent = OverlayIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OverlayIntent::Mount { at } => match state {
                OverlayState::Unmounted => OverlayState::Animating { mounted_at: at },
                // Already mounted: re-renders must not restart the sweep
                animating @ OverlayState::Animating { .. } => animating,
            },
            OverlayIntent::Unmount => OverlayState::Unmounted,
        }
    }
}
