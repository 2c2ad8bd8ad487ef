use once_cell::sync::OnceCell;
use rdev::{listen, EventType, Key};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Pending wall hotkey requests, shared between the listener thread and the
/// host control loop.
///
/// The two flags are the entire cross-thread surface: the listener only sets
/// them, the control loop reads and clears them via `take_*`. Repeated key
/// presses before consumption coalesce into a single action.
#[derive(Clone, Default)]
pub struct WallRequests {
    toggle: Arc<AtomicBool>,
    force_opaque: Arc<AtomicBool>,
}

impl WallRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_toggle(&self) {
        self.toggle.store(true, Ordering::SeqCst);
    }

    pub fn request_force_opaque(&self) {
        self.force_opaque.store(true, Ordering::SeqCst);
    }

    /// Read and clear the toggle flag.
    pub fn take_toggle(&self) -> bool {
        self.toggle.swap(false, Ordering::SeqCst)
    }

    /// Read and clear the force-opaque flag.
    pub fn take_force_opaque(&self) -> bool {
        self.force_opaque.swap(false, Ordering::SeqCst)
    }

    /// True when neither request is pending.
    pub fn is_idle(&self) -> bool {
        !self.toggle.load(Ordering::SeqCst) && !self.force_opaque.load(Ordering::SeqCst)
    }
}

/// Keys the listener reacts to. All requests fire on key release.
#[derive(Debug, Clone, Copy)]
pub struct WallKeyBindings {
    /// Toggles wall transparency on / off.
    pub toggle: Key,
    /// Force transparency OFF. Two slots because the viewer uses `[` and `]`
    /// for camera cycling and both must reliably free the walls.
    pub force_opaque: [Key; 2],
}

impl Default for WallKeyBindings {
    fn default() -> Self {
        Self {
            toggle: Key::Escape,
            force_opaque: [Key::LeftBracket, Key::RightBracket],
        }
    }
}

/// Parse a key name like "Escape", "F5", "A", "0" or "[" into a [`Key`].
pub fn parse_key(name: &str) -> Option<Key> {
    let upper = name.trim().to_ascii_uppercase();
    match upper.as_str() {
        "SPACE" => Some(Key::Space),
        "TAB" => Some(Key::Tab),
        "ENTER" | "RETURN" => Some(Key::Return),
        "ESC" | "ESCAPE" => Some(Key::Escape),
        "DELETE" => Some(Key::Delete),
        "BACKSPACE" => Some(Key::Backspace),
        "HOME" => Some(Key::Home),
        "END" => Some(Key::End),
        "PAGEUP" => Some(Key::PageUp),
        "PAGEDOWN" => Some(Key::PageDown),
        "LEFT" | "LEFTARROW" => Some(Key::LeftArrow),
        "RIGHT" | "RIGHTARROW" => Some(Key::RightArrow),
        "UP" | "UPARROW" => Some(Key::UpArrow),
        "DOWN" | "DOWNARROW" => Some(Key::DownArrow),
        "[" | "LEFTBRACKET" => Some(Key::LeftBracket),
        "]" | "RIGHTBRACKET" => Some(Key::RightBracket),
        _ if upper.starts_with('F') && upper.len() > 1 => match upper[1..].parse::<u8>().ok() {
            Some(1) => Some(Key::F1),
            Some(2) => Some(Key::F2),
            Some(3) => Some(Key::F3),
            Some(4) => Some(Key::F4),
            Some(5) => Some(Key::F5),
            Some(6) => Some(Key::F6),
            Some(7) => Some(Key::F7),
            Some(8) => Some(Key::F8),
            Some(9) => Some(Key::F9),
            Some(10) => Some(Key::F10),
            Some(11) => Some(Key::F11),
            Some(12) => Some(Key::F12),
            _ => None,
        },
        _ if upper.len() == 1 => upper.chars().next().and_then(parse_char_key),
        _ => None,
    }
}

fn parse_char_key(c: char) -> Option<Key> {
    if c.is_ascii_digit() {
        return Some(match c {
            '0' => Key::Num0,
            '1' => Key::Num1,
            '2' => Key::Num2,
            '3' => Key::Num3,
            '4' => Key::Num4,
            '5' => Key::Num5,
            '6' => Key::Num6,
            '7' => Key::Num7,
            '8' => Key::Num8,
            '9' => Key::Num9,
            _ => return None,
        });
    }
    if c.is_ascii_alphabetic() {
        return Some(match c {
            'A' => Key::KeyA,
            'B' => Key::KeyB,
            'C' => Key::KeyC,
            'D' => Key::KeyD,
            'E' => Key::KeyE,
            'F' => Key::KeyF,
            'G' => Key::KeyG,
            'H' => Key::KeyH,
            'I' => Key::KeyI,
            'J' => Key::KeyJ,
            'K' => Key::KeyK,
            'L' => Key::KeyL,
            'M' => Key::KeyM,
            'N' => Key::KeyN,
            'O' => Key::KeyO,
            'P' => Key::KeyP,
            'Q' => Key::KeyQ,
            'R' => Key::KeyR,
            'S' => Key::KeyS,
            'T' => Key::KeyT,
            'U' => Key::KeyU,
            'V' => Key::KeyV,
            'W' => Key::KeyW,
            'X' => Key::KeyX,
            'Y' => Key::KeyY,
            'Z' => Key::KeyZ,
            _ => return None,
        });
    }
    None
}

/// Match one input event against `bindings`, recording a request on release.
///
/// Shared by the live listener and tests so the matching logic stays off the
/// real keyboard in test runs.
pub fn process_event(requests: &WallRequests, bindings: &WallKeyBindings, event: &EventType) {
    if let EventType::KeyRelease(key) = event {
        if *key == bindings.toggle {
            tracing::debug!("wall toggle key released");
            requests.request_toggle();
        } else if bindings.force_opaque.contains(key) {
            tracing::debug!("wall force-opaque key released");
            requests.request_force_opaque();
        }
    }
}

static LISTENER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Start the background key listener feeding `requests`.
///
/// Process-wide idempotent: the first call spawns the listener thread and
/// returns `true`, any later call returns `false` and changes nothing. The
/// listener never touches scene state; it only flips the request flags.
/// Listen failures (e.g. no display server) are logged and retried, so
/// hotkeys degrade to doing nothing rather than failing the host.
pub fn install_wall_hotkeys(requests: &WallRequests, bindings: WallKeyBindings) -> bool {
    if LISTENER_INSTALLED.set(()).is_err() {
        return false;
    }
    let requests = requests.clone();
    tracing::debug!("starting wall hotkey listener for {:?}", bindings);
    thread::spawn(move || loop {
        let flags = requests.clone();
        let result = listen(move |event| {
            process_event(&flags, &bindings, &event.event_type);
        });
        match result {
            Ok(()) => tracing::warn!("wall hotkey listener exited unexpectedly. Restarting shortly"),
            Err(e) => tracing::warn!("wall hotkey listener failed: {:?}. Retrying shortly", e),
        }
        thread::sleep(Duration::from_millis(500));
    });
    true
}
