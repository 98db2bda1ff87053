//! Permissions each drinks route requires

use roastery_auth_core::RequiredPermission;

pub const GET_DRINKS: RequiredPermission = RequiredPermission::new("get:drinks");
pub const GET_DRINKS_DETAIL: RequiredPermission = RequiredPermission::new("get:drinks-detail");
pub const POST_DRINKS: RequiredPermission = RequiredPermission::new("post:drinks");
pub const PATCH_DRINKS: RequiredPermission = RequiredPermission::new("patch:drinks");
pub const DELETE_DRINKS: RequiredPermission = RequiredPermission::new("delete:drinks");
