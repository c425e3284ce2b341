//! Client-side fetch of the device API

use device_model::DeviceReports;

/// Abort handle for an in-flight fetch, tied to the component that started it
#[derive(Clone, Default)]
pub struct FetchAbort {
    #[cfg(feature = "csr")]
    controller: Option<send_wrapper::SendWrapper<web_sys::AbortController>>,
}

impl FetchAbort {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "csr")]
            controller: web_sys::AbortController::new()
                .ok()
                .map(send_wrapper::SendWrapper::new),
        }
    }

    /// Abort the fetch if it is still running
    pub fn abort(&self) {
        #[cfg(feature = "csr")]
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    #[cfg(feature = "csr")]
    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }
}

/// Fetch device reports from `/api/devices`
pub async fn fetch_reports(abort: &FetchAbort) -> Result<DeviceReports, String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or("no window")?;
        let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
        let url = format!("{}/api/devices", origin);
        let signal = abort.signal();

        let resp = gloo_net::http::Request::get(&url)
            .abort_signal(signal.as_ref())
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        if !resp.ok() {
            return Err(format!("GET {} returned status {}", url, resp.status()));
        }

        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = abort;
        Ok(DeviceReports::new())
    }
}
