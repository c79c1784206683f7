// Shared test helpers

#![allow(dead_code)]

use perfsnap::models::*;

pub fn sample(host: &str, window_id: u64, counts: &[u64], duration: f64) -> RawSample {
    RawSample {
        host: host.into(),
        window_id,
        pid: 1,
        counter_id: 1,
        items: counts
            .iter()
            .map(|&count| DispatchItem { category: 0, count })
            .collect(),
        duration,
        is_worker: false,
        is_top_level: true,
        memory_info: None,
    }
}

pub fn worker(host: &str, window_id: u64, counts: &[u64], duration: f64) -> RawSample {
    RawSample {
        is_worker: true,
        is_top_level: false,
        ..sample(host, window_id, counts, duration)
    }
}

pub fn frame(host: &str, window_id: u64, counts: &[u64], duration: f64) -> RawSample {
    RawSample {
        is_top_level: false,
        ..sample(host, window_id, counts, duration)
    }
}

pub fn media_memory(js: u64, audio: u64, video: u64, resources: u64) -> MemoryInfo {
    MemoryInfo {
        media: MediaMemoryInfo {
            audio_size: audio,
            video_size: video,
            resources_size: resources,
        },
        other: [("jsMemory".to_string(), js)].into_iter().collect(),
        ..Default::default()
    }
}

/// Counters as the browser's performance metrics API reports them.
pub const BROWSER_SAMPLES_JSON: &str = r#"[
  {
    "host": "example.com",
    "pid": 4242,
    "counterId": 7,
    "windowId": 5,
    "duration": 100.0,
    "isWorker": false,
    "isTopLevel": true,
    "items": [{"category": 0, "count": 2}, {"category": 3, "count": 1}],
    "memoryInfo": {"domDom": 10, "domStyle": 5, "domOther": 1, "GCHeapUsage": 4,
                   "media": {"audioSize": 0, "videoSize": 0, "resourcesSize": 0}}
  },
  {
    "host": "ads.example.net",
    "pid": 4242,
    "counterId": 8,
    "windowId": 5,
    "duration": 20.5,
    "isWorker": false,
    "isTopLevel": false,
    "items": [{"category": 0, "count": 4}],
    "memoryInfo": {"domDom": 3, "domStyle": 0, "domOther": 0, "GCHeapUsage": 2,
                   "media": {"audioSize": 1, "videoSize": 2, "resourcesSize": 3}}
  },
  {
    "host": "",
    "pid": 1000,
    "counterId": 1,
    "windowId": 18446744073709552000,
    "duration": 7.0,
    "isWorker": true,
    "isTopLevel": false,
    "items": [{"category": 1, "count": 6}]
  },
  {
    "host": "3f2a9c1e-extension-host",
    "pid": 5050,
    "counterId": 2,
    "windowId": 9,
    "duration": 3.25,
    "isWorker": false,
    "isTopLevel": true,
    "items": []
  }
]"#;
