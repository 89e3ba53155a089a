mod helpers;
mod issue_token;
mod routing;
mod verify_token;
