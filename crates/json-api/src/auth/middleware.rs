//! Manager basic-auth middleware.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use salvo::{
    http::header::{AUTHORIZATION, HeaderValue, WWW_AUTHENTICATE},
    prelude::*,
};

use crate::{
    extensions::*,
    observability::{AuthRejection, record_auth_rejection},
};

const CHALLENGE: &str = r#"Basic realm="customers", charset="UTF-8""#;

/// Decoded `Authorization: Basic` pair.
struct BasicCredentials {
    login: String,
    password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("login", &self.login)
            .field("password", &"**redacted**")
            .finish()
    }
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(credentials) = extract_basic_credentials(req) else {
        record_auth_rejection(AuthRejection::ManagerCredential);

        reject(res, "Missing or invalid Authorization header");

        return;
    };

    let state = match depot.state_or_500() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    if !state
        .auth
        .check_manager_credential(&credentials.login, &credentials.password)
        .await
    {
        record_auth_rejection(AuthRejection::ManagerCredential);

        reject(res, "Invalid manager credentials");

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn reject(res: &mut Response, brief: &str) {
    res.headers_mut()
        .insert(WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));

    res.render(StatusError::unauthorized().brief(brief));
}

fn extract_basic_credentials(req: &Request) -> Option<BasicCredentials> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = String::from_utf8(STANDARD.decode(encoded.trim()).ok()?).ok()?;
    let (login, password) = decoded.split_once(':')?;

    Some(BasicCredentials {
        login: login.to_owned(),
        password: password.to_owned(),
    })
}
