/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::sync::Arc;
use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug,info};

use crate::{AircraftReport, TrackStore, errors::Result};

pub type ReportSender = kanal::AsyncSender<AircraftReport>;
pub type ReportReceiver = kanal::AsyncReceiver<AircraftReport>;

pub fn report_channel (bound: usize)->(ReportSender,ReportReceiver) {
    kanal::bounded_async( bound)
}

/// send a report to the ingest task. This fails once the receiving end is closed
pub async fn send_report (sender: &ReportSender, report: AircraftReport)->Result<()> {
    Ok( sender.send( report).await? )
}

/// a source of aircraft reports. Connectors only talk to the store through the report channel,
/// they never see the store itself
#[async_trait]
pub trait ReportConnector {
    async fn start (&mut self, sender: ReportSender) -> Result<()>;
    fn terminate (&mut self);
}

/// spawn the task that moves reports from the channel into the store. The task ends (returning the
/// number of ingested reports) once all senders are dropped
pub fn spawn_ingest<S> (store: Arc<S>, receiver: ReportReceiver)->JoinHandle<usize>
    where S: TrackStore + Send + Sync + 'static
{
    tokio::spawn( async move {
        let mut n = 0;
        while let Ok(report) = receiver.recv().await {
            debug!("ingest {}", report);
            store.add_report( report);
            n += 1;
        }
        info!("report channel closed after {} reports", n);
        n
    })
}
