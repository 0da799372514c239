//! Embedded listing page asset
//!
//! The HTML shell, stylesheet, and upload/delete script served with every
//! directory listing. Table rows are substituted into the `{rows}` marker.

const LISTING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>File Server</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 20px;
            background-color: #f9f9f9;
            color: #333;
        }
        h1 {
            text-align: center;
        }
        table {
            width: 100%;
            border-collapse: collapse;
        }
        th, td {
            padding: 10px;
            border: 1px solid #ccc;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
        }
        form {
            margin: 20px 0;
        }
        .progress {
            width: 100%;
            background-color: #f3f3f3;
            height: 10px;
            border-radius: 5px;
            margin-top: 10px;
        }
        .progress-bar {
            height: 10px;
            width: 0;
            background-color: #4caf50;
            transition: width 0.4s;
        }
    </style>
    <script>
        function deleteFile(filename) {
            fetch(`/delete?filename=${encodeURIComponent(filename)}`, { method: 'DELETE' })
                .then(response => {
                    if (response.ok) {
                        alert(`File '${filename}' deleted successfully.`);
                        location.reload();
                    } else {
                        alert('Failed to delete file.');
                    }
                });
        }

        function uploadFile(event) {
            event.preventDefault();
            const fileInput = document.getElementById('file-input');
            const file = fileInput.files[0];
            if (!file) {
                alert('Please select a file to upload.');
                return;
            }

            const formData = new FormData();
            formData.append('file', file);

            const xhr = new XMLHttpRequest();
            xhr.open('POST', '/', true);

            xhr.upload.onprogress = function (event) {
                if (event.lengthComputable) {
                    const percent = (event.loaded / event.total) * 100;
                    document.getElementById('progress-bar').style.width = percent + '%';
                }
            };

            xhr.onload = function () {
                if (xhr.status === 201) {
                    alert('File uploaded successfully.');
                    location.reload();
                } else {
                    alert('Failed to upload file.');
                }
            };

            xhr.send(formData);
        }
    </script>
</head>
<body>
    <h1>File Server</h1>
    <table>
        <thead>
            <tr>
                <th>Filename</th>
                <th>Actions</th>
            </tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
    <form onsubmit="uploadFile(event)">
        <h2>Upload a File</h2>
        <input type="file" id="file-input" name="file">
        <button type="submit">Upload</button>
        <div class="progress">
            <div id="progress-bar" class="progress-bar"></div>
        </div>
    </form>
</body>
</html>
"#;

/// Render the full listing document around the given table rows.
pub fn render_listing_page(rows: &str) -> String {
    LISTING_PAGE.replace("{rows}", rows)
}
