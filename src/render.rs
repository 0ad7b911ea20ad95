//! Serializes the normalized track list into the output artifact.
//!
//! Two independent modes, never combined in one run: a standalone JSON
//! document, or a complete HTML page with the list embedded as a JSON
//! literal. The page's grid rendering, click-to-play, mobile redirect and
//! date/duration formatting live in the inline script shipped with the page;
//! they run in the consuming browser and are opaque payload here.

use std::path::Path;

use crate::{error::RelistenError, types::Track};

/// Pretty-prints the track list as a JSON array. Non-ASCII characters are
/// preserved as-is.
pub fn render_json(tracks: &[Track]) -> Result<String, RelistenError> {
    let mut json = serde_json::to_string_pretty(tracks)?;
    json.push('\n');
    Ok(json)
}

/// Writes the JSON document, creating missing parent directories.
pub async fn write_json(tracks: &[Track], path: &Path) -> Result<(), RelistenError> {
    let json = render_json(tracks)?;
    write_artifact(path, &json).await
}

/// Writes the HTML page, creating missing parent directories.
pub async fn write_html(
    tracks: &[Track],
    generated_at: &str,
    path: &Path,
) -> Result<(), RelistenError> {
    let html = render_html(tracks, generated_at)?;
    write_artifact(path, &html).await
}

async fn write_artifact(path: &Path, contents: &str) -> Result<(), RelistenError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            async_fs::create_dir_all(parent).await?;
        }
    }
    async_fs::write(path, contents).await?;
    Ok(())
}

/// Assembles the re-listen page around the embedded track data.
///
/// `generated_at` ends up in the "Last updated" footer line.
pub fn render_html(tracks: &[Track], generated_at: &str) -> Result<String, RelistenError> {
    let tracks_json = serde_json::to_string_pretty(tracks)?;

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Re-Listen - Moafunk Radio</title>

    <script async defer data-domain="live.moafunk.de" src="https://plausible.moafunk.de/js/plausible.js"></script>
    <link rel="stylesheet" type="text/css" href="main.css" media="screen" />

    <link rel="apple-touch-icon" sizes="180x180" href="./icons/apple-touch-icon.png">
    <link rel="icon" type="image/png" sizes="32x32" href="./icons/favicon-32x32.png">
    <link rel="icon" type="image/png" sizes="16x16" href="./icons/favicon-16x16.png">
    <link rel="manifest" href="./icons/site.webmanifest">
    <link rel="mask-icon" href="./icons/safari-pinned-tab.svg" color="#333333">
    <link rel="shortcut icon" href="./icons/favicon.ico">
    <meta name="msapplication-TileColor" content="#2b5797">
    <meta name="msapplication-config" content="./icons/browserconfig.xml">
    <meta name="theme-color" content="#ffffff">

    <style>
        .tracks-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
            gap: 20px;
            margin: 20px;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }}

        /* Responsive design for smaller screens */
        @media (max-width: 768px) {{
            .tracks-grid {{
                grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                gap: 15px;
                margin: 15px;
                padding: 15px;
            }}
        }}

        @media (max-width: 480px) {{
            .tracks-grid {{
                grid-template-columns: 1fr;
                gap: 0;
                margin: 0;
                padding: 0;
            }}

            .track-tile {{
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                justify-content: center;
                align-items: center;
                text-align: center;
                padding: 40px 20px;
                margin: 0;
                border-radius: 0;
            }}

            .track-artwork {{
                width: 80%;
                max-width: 280px;
                aspect-ratio: 1;
                margin-bottom: 30px;
            }}

            .track-title {{
                font-size: 24px !important;
                margin-bottom: 15px;
            }}

            .track-date {{
                font-size: 18px !important;
                margin-bottom: 10px;
            }}

            .track-duration {{
                font-size: 16px !important;
                margin-bottom: 15px;
            }}

            .track-description {{
                font-size: 14px !important;
                max-width: 300px;
            }}
        }}

        .track-tile {{
            cursor: pointer;
            border: 2px solid #000;
            transition: all 0.3s ease;
            background: white;
            padding: 15px;
            text-align: left;
        }}

        .track-tile:hover {{
            transform: scale(1.02);
            box-shadow: 0 4px 8px rgba(0,0,0,0.2);
        }}

        .track-tile.playing {{
            border-color: #ff6600;
            background: #fff3e0;
        }}

        .track-artwork {{
            width: 100%;
            aspect-ratio: 1;
            object-fit: cover;
            background: #f0f0f0;
            display: block;
            margin-bottom: 10px;
        }}

        .track-title {{
            margin: 10px 0 5px 0;
            font-size: 14pt;
            font-weight: bold;
            line-height: 1.2;
        }}

        .track-date {{
            font-size: 12pt;
            color: #666;
            margin-bottom: 5px;
        }}

        .track-duration {{
            font-size: 11pt;
            color: #999;
        }}

        .track-description {{
            font-size: 10pt;
            color: #777;
            margin-top: 5px;
            line-height: 1.3;
        }}

        .player-footer {{
            position: fixed;
            bottom: 0;
            left: 0;
            right: 0;
            background: white;
            border-top: 3px solid #000;
            padding: 15px;
            display: none;
            z-index: 1000;
        }}

        .player-footer.active {{
            display: block;
        }}

        .close-player {{
            position: absolute;
            top: 10px;
            right: 15px;
            background: none;
            border: none;
            font-size: 20px;
            cursor: pointer;
            color: #666;
        }}

        .close-player:hover {{
            color: #000;
        }}

        .soundcloud-player {{
            width: 100%;
            height: 20px;
            border: none;
        }}

        .loading {{
            text-align: center;
            padding: 40px;
            font-size: 16pt;
        }}

        .error {{
            text-align: center;
            padding: 40px;
            color: #ff0000;
            font-size: 16pt;
        }}

        .external-link {{
            display: inline-block;
            margin-top: 10px;
            padding: 5px 10px;
            background: #ff6600;
            color: white;
            text-decoration: none;
            border: 2px solid #000;
            font-size: 11pt;
        }}

        .external-link:hover {{
            background: #e55a00;
            color: white;
        }}

        .last-updated {{
            text-align: center;
            font-size: 10pt;
            color: #999;
            margin-top: 20px;
        }}

        /* Mobile optimizations */
        @media (max-width: 768px) {{
            .track-title {{
                font-size: 16pt;
            }}

            .track-date {{
                font-size: 14pt;
            }}

            .track-duration {{
                font-size: 13pt;
            }}

            .track-description {{
                font-size: 12pt;
            }}

            .player-footer {{
                display: none !important; /* Hide footer on mobile since we open SoundCloud directly */
            }}
        }}
    </style>
</head>
<body>
    <div class="container">
        <br/><br/>
        <img class="logo" src="./moafunk.png" alt="Moafunk Logo"/>
        <h2>Re-Listen</h2>
        <p>Listen to past Moafunk Radio recordings</p>

        <div id="tracks-container" class="tracks-grid"></div>

        <div class="last-updated">
            Last updated: {generated_at}
        </div>

        <br/><br/><br/><br/><br/><br/>
        <div class="links">
            <a href="./index.html">← Back to Live Stream</a>
        </div>
        <br/><br/><br/><br/><br/><br/>
    </div>

    <div id="player-footer" class="player-footer">
        <button id="close-player" class="close-player">&times;</button>
        <iframe id="soundcloud-player" class="soundcloud-player"
                scrolling="no" frameborder="no" allow="autoplay"
                src="">
        </iframe>
    </div>

    <script>
        // Embedded track data (generated at build time)
        const tracks = {tracks_json};

        // Global variables
        let currentTrackIndex = -1;

        // DOM elements
        const tracksContainer = document.getElementById('tracks-container');
        const playerFooter = document.getElementById('player-footer');
        const closePlayerBtn = document.getElementById('close-player');
        const soundcloudPlayer = document.getElementById('soundcloud-player');

        // Initialize the app
        init();

        function init() {{
            renderTracks();
            setupEventListeners();
        }}

        function renderTracks() {{
            if (tracks.length === 0) {{
                tracksContainer.innerHTML = '<div class="error">No tracks found.</div>';
                return;
            }}

            tracksContainer.innerHTML = tracks.map((track, index) => `
                <div class="track-tile" data-index="${{index}}">
                    <img src="${{track.artwork_url}}" alt="${{track.title}}" class="track-artwork"
                         onerror="this.src='./moafunk.png'" />
                    <div class="track-title">${{track.title}}</div>
                    <div class="track-date">${{formatDate(track.created_at)}}</div>
                    <div class="track-duration">${{formatDuration(track.duration)}}</div>
                    ${{track.description ? `<div class="track-description">${{track.description}}</div>` : ''}}
                </div>
            `).join('');
        }}

        function setupEventListeners() {{
            // Track tile clicks
            tracksContainer.addEventListener('click', (e) => {{
                const tile = e.target.closest('.track-tile');
                if (tile) {{
                    const index = parseInt(tile.dataset.index);
                    playTrack(index);
                }}
            }});

            // Close player button
            closePlayerBtn.addEventListener('click', closePlayer);
        }}

        function playTrack(index) {{
            const track = tracks[index];
            currentTrackIndex = index;

            // Check if on mobile device
            const isMobile = window.innerWidth <= 768 || /Android|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini/i.test(navigator.userAgent);

            if (isMobile) {{
                // On mobile, directly open SoundCloud link
                window.open(track.permalink_url, '_blank');
                return;
            }}

            // Update UI - remove playing state from all tiles
            document.querySelectorAll('.track-tile').forEach(tile => {{
                tile.classList.remove('playing');
            }});

            // Add playing state to current tile
            document.querySelector(`[data-index="${{index}}"]`).classList.add('playing');

            // Create SoundCloud embed URL using exact format from example
            const embedUrl = `https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/tracks/${{track.id}}&color=%23c4bc64&inverse=false&auto_play=true&show_user=false`;

            // Update iframe src
            soundcloudPlayer.src = embedUrl;

            // Show player footer
            playerFooter.classList.add('active');
        }}

        function closePlayer() {{
            // Hide player footer
            playerFooter.classList.remove('active');

            // Clear iframe src to stop playback
            soundcloudPlayer.src = '';

            // Remove playing state from all tiles
            document.querySelectorAll('.track-tile').forEach(tile => {{
                tile.classList.remove('playing');
            }});

            currentTrackIndex = -1;
        }}

        function formatDate(dateString) {{
            const date = new Date(dateString);
            return date.toLocaleDateString('en-US', {{
                year: 'numeric',
                month: 'short',
                day: 'numeric'
            }});
        }}

        function formatDuration(ms) {{
            const minutes = Math.floor(ms / 60000);
            const seconds = Math.floor((ms % 60000) / 1000);
            return `${{minutes}}:${{seconds.toString().padStart(2, '0')}}`;
        }}
    </script>
</body>
</html>
"##,
        tracks_json = tracks_json,
        generated_at = generated_at
    ))
}
