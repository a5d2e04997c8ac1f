//! The fixed set of actions keyscope exposes to the host registry.
//!
//! Each action is zero-argument and idempotent to invoke: running it again
//! simply re-renders and re-presents the report.

/// Which report an action produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
	/// Merged key binding report across all modal contexts.
	Bindings,
	/// Merged command report across all scopes.
	Commands,
	/// Only the bindings keyscope registered itself.
	OwnBindings,
}

/// A registerable action definition.
#[derive(Debug, Clone, Copy)]
pub struct ActionDef {
	/// Name the host registry keys the action on.
	pub name: &'static str,
	/// One-line human-readable description.
	pub description: &'static str,
	/// Logical panel identity the report is presented under.
	pub panel: &'static str,
	/// The report this action produces.
	pub action: ReportAction,
}

/// All actions, in registration order.
pub const ACTIONS: &[ActionDef] = &[
	ActionDef {
		name: "keyscope-bindings",
		description: "Show built-in and registered key bindings, merged per mode",
		panel: "keyscope://bindings",
		action: ReportAction::Bindings,
	},
	ActionDef {
		name: "keyscope-commands",
		description: "Show built-in and registered commands, merged per scope",
		panel: "keyscope://commands",
		action: ReportAction::Commands,
	},
	ActionDef {
		name: "keyscope-own-bindings",
		description: "Show the key bindings keyscope itself registered",
		panel: "keyscope://own-bindings",
		action: ReportAction::OwnBindings,
	},
];

/// Looks an action up by its registry name.
pub fn find_action(name: &str) -> Option<&'static ActionDef> {
	ACTIONS.iter().find(|def| def.name == name)
}
