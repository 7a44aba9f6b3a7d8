use serde::{Deserialize, Serialize};

use crate::session::{Role, Session};

/// Which flavor of the account dropdown a user sees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMenuVariant {
    /// Employee accounts: personal account and order pages.
    Employee,
    /// Company administrators: the management dashboard.
    Admin,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
/// What the navigation should expose for the current session.
///
/// A pure function of the session; holds no other state and is cheap to
/// re-derive whenever the session changes.
pub struct MenuDescriptor {
    /// Show the shopping-cart button. Employees only.
    pub show_cart: bool,
    /// Which account dropdown to render, if any.
    pub user_menu: Option<UserMenuVariant>,
}

impl MenuDescriptor {
    /// Derives the descriptor for `session`.
    ///
    /// Absent sessions, absent roles, and unrecognized role identifiers all
    /// produce the default descriptor with every privileged control hidden.
    pub fn from_session(session: Option<&Session>) -> Self {
        match session.and_then(Role::from_session) {
            Some(Role::Employee) => MenuDescriptor {
                show_cart: true,
                user_menu: Some(UserMenuVariant::Employee),
            },
            Some(Role::CompanyAdmin) => MenuDescriptor {
                show_cart: false,
                user_menu: Some(UserMenuVariant::Admin),
            },
            None => MenuDescriptor::default(),
        }
    }

    /// True when an account dropdown should be rendered at all.
    pub fn show_user_menu(&self) -> bool {
        self.user_menu.is_some()
    }
}

/// A static navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Links shown to every visitor, signed in or not.
pub const PRIMARY_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Shop",
        href: "/shop",
    },
    NavLink {
        label: "All Products",
        href: "/shop",
    },
];

/// What activating an account-dropdown entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Navigate to the given path.
    Navigate(&'static str),
    /// Hand off to the authentication collaborator's sign-out flow.
    SignOut,
}

/// One entry in the account dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserMenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

impl UserMenuVariant {
    /// The dropdown entries for this variant.
    pub fn items(&self) -> &'static [UserMenuItem] {
        match self {
            UserMenuVariant::Employee => &[
                UserMenuItem {
                    label: "My Account",
                    action: MenuAction::Navigate("/my-account"),
                },
                UserMenuItem {
                    label: "Order History",
                    action: MenuAction::Navigate("/order-history"),
                },
            ],
            UserMenuVariant::Admin => &[
                UserMenuItem {
                    label: "Dashboard",
                    action: MenuAction::Navigate("/dashboard"),
                },
                UserMenuItem {
                    label: "Log out",
                    action: MenuAction::SignOut,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_gets_cart_and_employee_menu() {
        let session = Session::signed_in(Role::Employee, "tok");
        let menu = MenuDescriptor::from_session(Some(&session));

        assert!(menu.show_cart);
        assert!(menu.show_user_menu());
        assert_eq!(menu.user_menu, Some(UserMenuVariant::Employee));
    }

    #[test]
    fn test_admin_gets_menu_but_no_cart() {
        let session = Session::signed_in(Role::CompanyAdmin, "tok");
        let menu = MenuDescriptor::from_session(Some(&session));

        assert!(!menu.show_cart);
        assert!(menu.show_user_menu());
        assert_eq!(menu.user_menu, Some(UserMenuVariant::Admin));
    }

    #[test]
    fn test_unknown_role_hides_everything() {
        let session = Session {
            role: Some("warehouse_bot".into()),
            access_token: Some("tok".into()),
        };
        let menu = MenuDescriptor::from_session(Some(&session));

        assert!(!menu.show_cart);
        assert!(!menu.show_user_menu());
        assert_eq!(menu.user_menu, None);
    }

    #[test]
    fn test_missing_role_and_missing_session_hide_everything() {
        let roleless = Session {
            role: None,
            access_token: Some("tok".into()),
        };
        assert_eq!(
            MenuDescriptor::from_session(Some(&roleless)),
            MenuDescriptor::default()
        );
        assert_eq!(MenuDescriptor::from_session(None), MenuDescriptor::default());
    }

    #[test]
    fn test_employee_menu_items_navigate_only() {
        let items = UserMenuVariant::Employee.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "My Account");
        assert_eq!(items[0].action, MenuAction::Navigate("/my-account"));
        assert_eq!(items[1].label, "Order History");
        assert_eq!(items[1].action, MenuAction::Navigate("/order-history"));
    }

    #[test]
    fn test_admin_menu_ends_with_sign_out() {
        let items = UserMenuVariant::Admin.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].action, MenuAction::Navigate("/dashboard"));
        assert_eq!(items[1].label, "Log out");
        assert_eq!(items[1].action, MenuAction::SignOut);
    }

    #[test]
    fn test_primary_links_point_at_shop() {
        for link in PRIMARY_LINKS {
            assert_eq!(link.href, "/shop");
        }
    }
}
