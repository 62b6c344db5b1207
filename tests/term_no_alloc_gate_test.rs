use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_life::core::GridStore;
use tui_life::term::{FrameBuffer, HudStatus, LifeView, Viewport};
use tui_life::types::Coord;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn term_life_view_render_is_allocation_free_after_warmup() {
    let view = LifeView::default();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(0, 0);

    let mut store = GridStore::with_seed(30, 50, 8).unwrap();
    store.randomize(0.4);
    let mut hud = HudStatus {
        generation: 0,
        population: store.population(),
        running: true,
        interval_ms: 100,
        cursor: Some(Coord::new(3, 4)),
    };

    // Warm-up (framebuffer sizing).
    view.render_into(store.grid(), &hud, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for generation in 1..=200u64 {
            hud.generation = generation;
            view.render_into(store.grid(), &hud, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
