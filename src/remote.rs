use infrared::ProtocolId;
use infrared::protocol::nec::NecCommand;
use infrared::remotecontrol::{Action, RemoteControlModel};

use crate::command::Command;

/// The 21-key NEC remote bundled with the fixture, device address 0
#[derive(Debug, Default, Clone, Copy)]
pub struct CctRemote;

impl RemoteControlModel for CctRemote {
    type Cmd = NecCommand;
    const PROTOCOL: ProtocolId = ProtocolId::Nec;
    const ADDRESS: u32 = 0;
    const MODEL: &'static str = "CCT Remote";

    const BUTTONS: &'static [(u32, Action)] = &[
        (69, Action::Power),
        (70, Action::VolumeUp),
        (71, Action::Stop),
        (68, Action::Left),
        (64, Action::Play),
        (67, Action::Right),
        (7, Action::Down),
        (21, Action::VolumeDown),
        (9, Action::Up),
        (22, Action::Zero),
        (25, Action::Eq),
        (13, Action::Repeat),
        (12, Action::One),
        (24, Action::Two),
        (94, Action::Three),
        (8, Action::Four),
        (28, Action::Five),
        (90, Action::Six),
        (66, Action::Seven),
        (82, Action::Eight),
        (74, Action::Nine),
    ];
}

/// Map a decoded remote action onto an engine command
///
/// Buttons without an assigned function map to `None`.
pub fn action_to_command(action: Action) -> Option<Command> {
    match action {
        Action::Power => Some(Command::TogglePower),
        Action::Stop => Some(Command::CyclePreset),
        Action::Up => Some(Command::IncreaseBrightness),
        Action::Down => Some(Command::DecreaseBrightness),
        Action::Eq => Some(Command::ShiftColder),
        Action::Play => Some(Command::ShiftWarmer),
        Action::Four => Some(Command::ToggleNight),
        Action::One => Some(Command::SetTenPercent),
        Action::Two => Some(Command::SetHalfPower),
        Action::Three => Some(Command::SetFullPower),
        Action::Five => Some(Command::StoreColor),
        _ => None,
    }
}

/// Decode a raw NEC frame into an engine command
///
/// Frames for other device addresses are dropped, as are unassigned
/// buttons and repeat frames for commands that act once per press.
pub fn command_from_nec(frame: &NecCommand) -> Option<Command> {
    if u32::from(frame.addr) != CctRemote::ADDRESS {
        return None;
    }
    let action = CctRemote::BUTTONS
        .iter()
        .find_map(|(code, action)| (*code == u32::from(frame.cmd)).then_some(*action))?;
    let command = action_to_command(action)?;
    if frame.repeat && !command.accepts_repeats() {
        return None;
    }
    Some(command)
}
